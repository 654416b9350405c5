use serde::Serialize;

/// A service category shown in the portfolio. Reference data, never stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// A pricing tier. `features` keeps its listed order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Package {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}
