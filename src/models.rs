//! Frontend Models
//!
//! Data structures matching the payload shapes a future backend API
//! would return. Everything is mocked locally for now.

use serde::{Deserialize, Serialize};

/// Blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Markdown body
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub date: String,
}

/// Workout program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub level: String,
    pub duration_weeks: u32,
    pub sessions_per_week: u32,
    pub features: Vec<String>,
}

/// Store product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub category: String,
}

/// Membership tier shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: u32,
    pub name: String,
    pub price_cents: u32,
    pub period: String,
    pub perks: Vec<String>,
    pub featured: bool,
}

/// Comment on a blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub initials: String,
    pub date: String,
    pub content: String,
    pub likes: u32,
    pub replies: Vec<Reply>,
}

/// Nested reply under a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u32,
    pub author: String,
    pub date: String,
    pub content: String,
    pub likes: u32,
    /// Author name of the reply this one answers, if any
    pub reply_to: Option<String>,
}

/// What a global search hit points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchKind {
    Post,
    Workout,
    Product,
}

impl SearchKind {
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Post => "Article",
            SearchKind::Workout => "Workout",
            SearchKind::Product => "Store",
        }
    }
}

/// Global search result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: u32,
    pub kind: SearchKind,
    pub title: String,
    pub subtitle: String,
    pub url: String,
}

/// One line of a checkout order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    pub price_cents: u32,
}

/// Outbound checkout payload (logged, never sent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub lines: Vec<OrderLine>,
    pub total_cents: u32,
}

/// Outbound contact-form payload (logged, never sent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Uppercase initials from a display name, at most two letters
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Format integer cents as a dollar price
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_initials() {
        assert_eq!(avatar_initials("Sarah Mitchell"), "SM");
        assert_eq!(avatar_initials("alex"), "A");
        assert_eq!(avatar_initials("Ana Lucia Reyes"), "AL");
        assert_eq!(avatar_initials(""), "");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(4900), "$49.00");
        assert_eq!(format_price(305), "$3.05");
    }
}
