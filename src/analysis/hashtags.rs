use crate::dataset::FilteredView;
use std::collections::HashMap;

/// Extract hashtags from tweet text: a `#` followed by a run of alphanumeric
/// or underscore characters. Tags are lowercased so `#India` and `#india`
/// count as one.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '#' {
            continue;
        }
        let mut tag = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                tag.extend(next.to_lowercase());
                chars.next();
            } else {
                break;
            }
        }
        if !tag.is_empty() {
            tags.push(tag);
        }
    }

    tags
}

/// Top `n` hashtags across the view by frequency, most frequent first.
/// Equal counts are ordered alphabetically so the result is deterministic.
pub fn top_hashtags(view: &FilteredView, n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in view.iter() {
        for tag in extract_hashtags(&record.text) {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}
