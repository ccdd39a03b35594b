use serde::{Deserialize, Serialize};

/// The eight O-1A evidentiary criteria (8 CFR 214.2(o)(3)(iii)).
///
/// A closed enum rather than free-form labels: every consumption site matches
/// exhaustively, so an unknown criterion cannot reach the matcher or the
/// aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Awards,
    Membership,
    Press,
    Judging,
    OriginalContribution,
    ScholarlyArticles,
    CriticalEmployment,
    HighRemuneration,
}

impl Criterion {
    pub const ALL: [Criterion; 8] = [
        Criterion::Awards,
        Criterion::Membership,
        Criterion::Press,
        Criterion::Judging,
        Criterion::OriginalContribution,
        Criterion::ScholarlyArticles,
        Criterion::CriticalEmployment,
        Criterion::HighRemuneration,
    ];

    /// Wire label, matching the JSON keys of `criteria_assessments`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Awards => "awards",
            Criterion::Membership => "membership",
            Criterion::Press => "press",
            Criterion::Judging => "judging",
            Criterion::OriginalContribution => "original_contribution",
            Criterion::ScholarlyArticles => "scholarly_articles",
            Criterion::CriticalEmployment => "critical_employment",
            Criterion::HighRemuneration => "high_remuneration",
        }
    }

    /// Title-cased display name used in generated narrative text.
    pub fn title(&self) -> &'static str {
        match self {
            Criterion::Awards => "Awards",
            Criterion::Membership => "Membership",
            Criterion::Press => "Press",
            Criterion::Judging => "Judging",
            Criterion::OriginalContribution => "Original Contribution",
            Criterion::ScholarlyArticles => "Scholarly Articles",
            Criterion::CriticalEmployment => "Critical Employment",
            Criterion::HighRemuneration => "High Remuneration",
        }
    }

    /// Statutory description of the criterion.
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::Awards => {
                "Receipt of nationally or internationally recognized prizes or awards for \
                 excellence in the field of endeavor."
            }
            Criterion::Membership => {
                "Membership in associations in the field which require outstanding achievements \
                 of their members, as judged by recognized national or international experts."
            }
            Criterion::Press => {
                "Published material about the person in professional or major trade publications \
                 or other major media, relating to the person's work in the field."
            }
            Criterion::Judging => {
                "Participation, either individually or on a panel, as a judge of the work of \
                 others in the same or an allied field of specialization."
            }
            Criterion::OriginalContribution => {
                "Original scientific, scholarly, artistic, or business-related contributions of \
                 major significance in the field."
            }
            Criterion::ScholarlyArticles => {
                "Authorship of scholarly articles in the field, in professional or major trade \
                 publications or other major media."
            }
            Criterion::CriticalEmployment => {
                "Employment in a critical or essential capacity at an organization with a \
                 distinguished reputation."
            }
            Criterion::HighRemuneration => {
                "Command of a high salary or other significantly high remuneration for services, \
                 in relation to others in the field."
            }
        }
    }
}
