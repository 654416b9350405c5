use super::model::{Package, PortfolioItem};

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Wedding Collections",
        description: "Capturing timeless moments of your special day with artistic elegance and authentic emotion.",
        category: "wedding",
    },
    PortfolioItem {
        title: "Portrait Sessions",
        description: "Professional portraits that reveal personality and character through masterful lighting and composition.",
        category: "portrait",
    },
    PortfolioItem {
        title: "Event Photography",
        description: "Dynamic coverage of corporate events, celebrations, and special occasions.",
        category: "event",
    },
    PortfolioItem {
        title: "Family Moments",
        description: "Warm, natural family portraits that capture genuine connections and joy.",
        category: "family",
    },
];

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Essential Package",
        description: "Perfect for intimate sessions and smaller events",
        price: "$599",
        features: &[
            "2 hours of shooting",
            "50 edited high-resolution images",
            "Online gallery for viewing and sharing",
            "Personal use printing rights",
        ],
    },
    Package {
        name: "Premium Package",
        description: "Our most popular choice for weddings and major events",
        price: "$1,299",
        features: &[
            "6 hours of shooting",
            "200 edited high-resolution images",
            "Second photographer included",
            "Online gallery with download access",
            "Complimentary engagement session",
            "Full commercial printing rights",
        ],
    },
    Package {
        name: "Signature Package",
        description: "Complete coverage with luxury presentation",
        price: "$2,499",
        features: &[
            "Full day coverage (up to 10 hours)",
            "400+ edited high-resolution images",
            "Two photographers and assistant",
            "Premium online gallery",
            "Engagement session included",
            "Custom-designed photo album",
            "Full commercial printing rights",
            "Complimentary prints package",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(PORTFOLIO.len(), 4);
        assert_eq!(PACKAGES.len(), 3);
    }

    #[test]
    fn packages_are_ordered_by_price() {
        let names: Vec<_> = PACKAGES.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Essential Package", "Premium Package", "Signature Package"]);
        assert_eq!(PACKAGES[1].features.len(), 6);
    }
}
