use axum::Json;

use crate::modules::catalog::{
    data::{PACKAGES, PORTFOLIO},
    model::{Package, PortfolioItem},
};

pub async fn list_portfolio() -> Json<&'static [PortfolioItem]> {
    Json(PORTFOLIO)
}

pub async fn list_packages() -> Json<&'static [Package]> {
    Json(PACKAGES)
}
