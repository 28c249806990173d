//! Placeholder page views.
//!
//! The storefront's real pages (sign-up forms, catalog, order history) live
//! outside this crate. These stand-ins render a heading and the location they
//! were mounted for, which is enough to see routing work end to end.

use crate::routing::Location;
use crate::views::{escape_html, View, ViewId};

fn page(id: ViewId, title: &str, location: &Location) -> String {
    format!(
        "<main data-view=\"{}\"><h1>{}</h1><p class=\"location\">{}</p></main>",
        id,
        title,
        escape_html(location.as_str())
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Home;

impl View for Home {
    fn id(&self) -> ViewId {
        ViewId::Home
    }

    fn render(&self, location: &Location) -> String {
        page(self.id(), "Home", location)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Signup;

impl View for Signup {
    fn id(&self) -> ViewId {
        ViewId::Signup
    }

    fn render(&self, location: &Location) -> String {
        page(self.id(), "Sign up", location)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Login;

impl View for Login {
    fn id(&self) -> ViewId {
        ViewId::Login
    }

    fn render(&self, location: &Location) -> String {
        page(self.id(), "Log in", location)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Products;

impl View for Products {
    fn id(&self) -> ViewId {
        ViewId::Products
    }

    fn render(&self, location: &Location) -> String {
        page(self.id(), "Products", location)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Orders;

impl View for Orders {
    fn id(&self) -> ViewId {
        ViewId::Orders
    }

    fn render(&self, location: &Location) -> String {
        page(self.id(), "Orders", location)
    }
}
