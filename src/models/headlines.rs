use super::Article;

/// Display caps for one top-headlines response. Articles beyond the
/// trending window are discarded.
pub const SECONDARY_LIMIT: usize = 6;
pub const TRENDING_LIMIT: usize = 8;

/// One already-fetched, already-ordered headlines list partitioned for
/// display: the first article is featured, the next six fill the story
/// grid, the eight after that fill the trending sidebar.
#[derive(Debug)]
pub struct Headlines<'a> {
    pub featured: &'a Article,
    pub secondary: &'a [Article],
    pub trending: &'a [Article],
}

/// Returns None for an empty list; the caller renders the "no news"
/// branch instead (there is no featured-only fallback).
pub fn partition(articles: &[Article]) -> Option<Headlines<'_>> {
    let featured = articles.first()?;

    let secondary_end = articles.len().min(1 + SECONDARY_LIMIT);
    let secondary = &articles[1..secondary_end];

    let trending_start = 1 + SECONDARY_LIMIT;
    let trending_end = articles.len().min(trending_start + TRENDING_LIMIT);
    let trending = if articles.len() > trending_start {
        &articles[trending_start..trending_end]
    } else {
        &[]
    };

    Some(Headlines {
        featured,
        secondary,
        trending,
    })
}
