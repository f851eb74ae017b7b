// src/parse/patterns.rs

use anyhow::{Context, Result};
use regex::Regex;

/// A course id token: one or more uppercase-letter/ampersand groups separated
/// by spaces, then a space and exactly 3 digits. Matches `CSE 143`,
/// `E E 215`, `MATH 309`. The trailing boundary keeps 4+ digit numbers from
/// matching on their first three digits.
const COURSE_TOKEN: &str = r"(?:[A-Z&]+ )+\d{3}\b";

/// Compiled clause-shape patterns, tried in a fixed priority order by the
/// generation pass: triple-either first, then double-either, then unmatched.
pub struct ClausePatterns {
    course_token: Regex,
    double_either: Regex,
    triple_either: Regex,
    concurrent: Regex,
}

impl ClausePatterns {
    pub fn compile() -> Result<Self> {
        // "Either MATH 124 or MATH 134"
        let double = format!(r"^(?:[Ee]ither )?({COURSE_TOKEN}) or ({COURSE_TOKEN})");
        // "CSE 311, CSE 321, or CSE 331" (the " or" is optional)
        let triple = format!(
            r"^(?:[Ee]ither )?({COURSE_TOKEN}), ({COURSE_TOKEN}), (?:or )?({COURSE_TOKEN})"
        );
        // "..., which may be taken concurrently. Instructor ..." and the
        // bare/trailing-period forms.
        let concurrent =
            r"(?:either of )?which may be taken concurrently(?:\. Instructor|\.?$)";

        Ok(Self {
            course_token: Regex::new(COURSE_TOKEN)
                .context("compiling course-id token pattern")?,
            double_either: Regex::new(&double)
                .context("compiling double-either clause pattern")?,
            triple_either: Regex::new(&triple)
                .context("compiling triple-either clause pattern")?,
            concurrent: Regex::new(concurrent)
                .context("compiling concurrent phrase pattern")?,
        })
    }

    /// Every course id token in the clause, in order of appearance.
    pub fn course_tokens<'t>(&self, clause: &'t str) -> Vec<&'t str> {
        self.course_token
            .find_iter(clause)
            .map(|m| m.as_str())
            .collect()
    }

    /// True if the clause says the prerequisite may be taken concurrently.
    pub fn is_concurrent(&self, clause: &str) -> bool {
        self.concurrent.is_match(clause)
    }

    /// Try the clause-shape cascade on an ambiguous clause.
    ///
    /// Returns the captured alternatives if either shape matches. A match is
    /// accepted only when the captured alternative count equals the total
    /// course-token count of the clause; this rejects a double-either partial
    /// match on the head of a 3+ alternative list.
    pub fn match_alternatives(&self, clause: &str) -> Option<Vec<String>> {
        let token_count = self.course_token.find_iter(clause).count();

        for pattern in [&self.triple_either, &self.double_either] {
            if let Some(caps) = pattern.captures(clause) {
                let alternatives: Vec<String> = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect();
                if alternatives.len() == token_count {
                    return Some(alternatives);
                }
            }
        }

        None
    }
}
