//! Ranking tiers and rank-ordered views.

use crate::model::University;
use crate::sort::SortKey;

/// Badge tier shown on cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBadge {
    Top5,
    Top10,
    Top25,
    Rank(u32),
}

impl RankBadge {
    #[must_use]
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            0..=5 => Self::Top5,
            6..=10 => Self::Top10,
            11..=25 => Self::Top25,
            n => Self::Rank(n),
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Top5 => "Top 5".to_owned(),
            Self::Top10 => "Top 10".to_owned(),
            Self::Top25 => "Top 25".to_owned(),
            Self::Rank(n) => format!("#{n}"),
        }
    }

    /// CSS modifier for the badge variant.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Top5 => "accent",
            Self::Top10 => "success",
            Self::Top25 => "info",
            Self::Rank(_) => "muted",
        }
    }
}

/// Podium medal for the top three ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    #[must_use]
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}

/// The `n` best-ranked records.
#[must_use]
pub fn top_ranked(universities: &[University], n: usize) -> Vec<&University> {
    let mut ranked: Vec<&University> = universities.iter().collect();
    SortKey::Ranking.sort(&mut ranked);
    ranked.truncate(n);
    ranked
}

/// Records of one discipline, best rank first. A blank discipline selects
/// nothing.
#[must_use]
pub fn by_discipline<'a>(universities: &'a [University], discipline: &str) -> Vec<&'a University> {
    if discipline.trim().is_empty() {
        return Vec::new();
    }
    let mut matching: Vec<&University> = universities.iter().filter(|u| u.discipline == discipline).collect();
    SortKey::Ranking.sort(&mut matching);
    matching
}

/// First record, in source order, whose name contains `query`
/// case-insensitively.
#[must_use]
pub fn find_by_name<'a>(universities: &'a [University], query: &str) -> Option<&'a University> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    universities.iter().find(|u| u.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
#[path = "ranking_test.rs"]
mod ranking_test;
