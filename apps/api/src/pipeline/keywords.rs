//! Static lexicons driving evidence detection and section boosting.
//!
//! All tables are read-only and process-wide; the pipeline never mutates them.

use crate::models::Criterion;

/// Keyword/phrase set for one criterion. Matching is whole-word and
/// case-insensitive; multi-word phrases are matched literally.
pub fn criterion_keywords(criterion: Criterion) -> &'static [&'static str] {
    match criterion {
        Criterion::Awards => &[
            "award",
            "prize",
            "recognition",
            "honor",
            "medal",
            "trophy",
            "distinction",
            "finalist",
            "winner",
            "granted",
            "received",
            "presented with",
            "honored",
            "recognized",
            "acclaimed",
            "commended",
            "achievement",
        ],
        Criterion::Membership => &[
            "member",
            "association",
            "society",
            "organization",
            "committee",
            "group",
            "council",
            "board",
            "fellow",
            "consortium",
            "chapter",
            "admitted to",
            "invited to",
            "selected for",
            "elected to",
            "exclusive",
            "prestigious",
            "selective",
            "by invitation",
        ],
        Criterion::Press => &[
            "featured in",
            "published in",
            "mentioned in",
            "highlighted in",
            "profiled in",
            "covered by",
            "cited in",
            "interviewed by",
            "press",
            "media",
            "news",
            "article",
            "magazine",
            "newspaper",
            "blog",
            "website",
            "podcast",
            "radio",
            "tv",
        ],
        Criterion::Judging => &[
            "judge",
            "jury",
            "reviewer",
            "evaluator",
            "panelist",
            "selection committee",
            "assessment",
            "evaluation",
            "review",
            "judging",
            "examined",
            "critiqued",
            "assessed",
            "selected",
            "reviewed",
            "evaluated",
        ],
        Criterion::OriginalContribution => &[
            "pioneered",
            "invented",
            "developed",
            "discovered",
            "established",
            "founded",
            "created",
            "designed",
            "implemented",
            "built",
            "launched",
            "innovation",
            "breakthrough",
            "novel",
            "original",
            "first",
            "innovative",
            "groundbreaking",
            "revolutionary",
            "transformative",
            "leading-edge",
            "cutting-edge",
            "patent",
        ],
        Criterion::ScholarlyArticles => &[
            "author",
            "published",
            "journal",
            "paper",
            "article",
            "publication",
            "conference",
            "proceedings",
            "research",
            "scholar",
            "academic",
            "peer-reviewed",
            "cited",
            "bibliography",
            "preprint",
            "manuscript",
            "co-author",
            "first author",
        ],
        Criterion::CriticalEmployment => &[
            "key role",
            "critical role",
            "essential role",
            "leading role",
            "crucial position",
            "vital member",
            "pivotal",
            "led",
            "directed",
            "managed",
            "oversaw",
            "headed",
            "spearheaded",
            "senior",
            "executive",
            "director",
            "chief",
            "vp",
            "c-level",
            "distinguished",
            "renowned",
            "eminent",
            "prominent",
            "prestigious company",
        ],
        Criterion::HighRemuneration => &[
            "salary",
            "compensation",
            "remuneration",
            "income",
            "earnings",
            "wage",
            "pay",
            "stipend",
            "bonus",
            "stock options",
            "equity",
            "benefits",
            "package",
            "high",
            "substantial",
            "significant",
            "above average",
            "competitive",
            "premium",
            "top",
        ],
    }
}

/// Canonical section headers the segmenter recognizes, in priority order.
pub const SECTION_HEADERS: &[&str] = &[
    "education",
    "experience",
    "employment",
    "work experience",
    "skills",
    "publications",
    "awards",
    "honors",
    "achievements",
    "projects",
    "research",
    "leadership",
    "professional activities",
    "languages",
    "certifications",
    "memberships",
    "affiliations",
    "volunteering",
    "references",
    "personal",
];

/// A-priori section-to-criteria relevance table. Evidence found in one of
/// these sections gets its confidence boosted for the listed criteria.
/// Sections absent from the table carry no boost.
pub fn section_relevance(section: &str) -> &'static [Criterion] {
    match section {
        "awards" | "honors" => &[Criterion::Awards],
        "achievements" => &[Criterion::Awards, Criterion::OriginalContribution],
        "publications" => &[Criterion::ScholarlyArticles, Criterion::Press],
        "memberships" | "affiliations" => &[Criterion::Membership],
        "professional activities" => &[Criterion::Judging, Criterion::Membership],
        "research" => &[Criterion::OriginalContribution, Criterion::ScholarlyArticles],
        "projects" => &[Criterion::OriginalContribution],
        "experience" | "employment" | "work experience" => {
            &[Criterion::CriticalEmployment, Criterion::HighRemuneration]
        }
        _ => &[],
    }
}

/// Adjectives that mark an organization name as prestigious.
pub const PRESTIGE_MARKERS: &[&str] = &[
    "renowned",
    "prestigious",
    "leading",
    "top",
    "major",
    "prominent",
    "distinguished",
    "well-known",
    "respected",
    "established",
    "global",
];

/// Whole-word, case-insensitive containment test. `haystack` must already be
/// lower-cased; `term` is stored lower-case in the tables above. Multi-word
/// phrases match literally, with word boundaries at both ends.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(term) {
        let abs = start + pos;
        let end = abs + term.len();
        let left_ok = abs == 0 || !is_word_byte(bytes[abs - 1]);
        let right_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if left_ok && right_ok {
            return true;
        }
        start = end;
        if start >= haystack.len() {
            break;
        }
    }
    false
}

/// Number of the criterion's keywords present in the sentence.
pub fn count_matches(sentence_lower: &str, criterion: Criterion) -> usize {
    criterion_keywords(criterion)
        .iter()
        .filter(|term| contains_term(sentence_lower, term))
        .count()
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
