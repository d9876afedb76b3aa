//! Shared test utilities and fixtures.

#![allow(dead_code)]

use waymark::{Catalogue, Link};

// Re-export canonical test utilities from waymark::testing
pub use waymark::testing::{make_catalogue, make_category, make_link};

/// The bilingual directory most behavior tests run against.
pub fn sample_links() -> Vec<Link> {
    vec![
        make_link("1", "GitHub", "code hosting", &["dev"]),
        make_link("2", "Weather", "forecast", &["tools"]),
        make_link("3", "知乎", "问答社区", &["社区", "知识"]),
        make_link("4", "百度", "搜索引擎", &["搜索"]),
        make_link("5", "GitLab", "devops platform", &["dev", "git"]),
    ]
}

/// A catalogue document wrapping [`sample_links`] in two categories.
pub fn sample_catalogue() -> Catalogue {
    let mut catalogue = Catalogue {
        version: "1.0".to_string(),
        categories: vec![
            make_category("cat-dev", "Development"),
            make_category("cat-cn", "中文站点"),
        ],
        links: sample_links(),
        ..Catalogue::default()
    };
    for link in &mut catalogue.links {
        if link.title.chars().any(|c| !c.is_ascii()) {
            link.category_id = "cat-cn".to_string();
        }
    }
    catalogue
}

/// Assert that no link id appears twice.
pub fn assert_no_duplicate_ids(links: &[Link]) {
    let mut seen = std::collections::HashSet::new();
    for link in links {
        assert!(
            seen.insert(link.id.clone()),
            "duplicate link id in results: {}",
            link.id
        );
    }
}
