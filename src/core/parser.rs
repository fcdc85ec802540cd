use crate::domain::model::{Assignment, Group, Row, ADVANCING_GROUPS};
use crate::utils::error::{EtlError, Result};
use regex::Regex;

/// Parses one line of the pasted third-place table.
///
/// A data line carries a row number, the 8 advancing group letters and the 8 `3X`
/// tokens for slots `1A..1L`. Anything without 8 tokens (headers, blank lines) is
/// skipped; a line with 8 tokens but no resolvable group set is an error.
pub struct LineParser {
    third_token_pattern: Regex,
    standalone_letter_pattern: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            third_token_pattern: Regex::new(r"\b3[A-L]\b")?,
            standalone_letter_pattern: Regex::new(r"\b[A-L]\b")?,
        })
    }

    pub fn parse_line(&self, raw: &str) -> Result<Option<Row>> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let tokens = self.third_place_tokens(line);
        if tokens.len() < ADVANCING_GROUPS {
            return Ok(None);
        }

        // Leading matches are row-number artifacts; the slot columns come last.
        let sources = &tokens[tokens.len() - ADVANCING_GROUPS..];

        let mut groups = self.standalone_groups(line);
        if groups.len() != ADVANCING_GROUPS {
            tracing::debug!(
                "Found {} standalone group letters, deriving groups from slot tokens",
                groups.len()
            );
            groups = dedup_in_order(sources.iter().copied());
        }

        if groups.len() != ADVANCING_GROUPS {
            return Err(EtlError::UnresolvedGroupsError {
                line: line.to_string(),
            });
        }

        groups.sort();
        let key: String = groups.iter().map(|group| group.letter()).collect();

        let sources: [Group; ADVANCING_GROUPS] =
            sources
                .try_into()
                .map_err(|_| EtlError::UnresolvedGroupsError {
                    line: line.to_string(),
                })?;

        Ok(Some(Row {
            key,
            assignment: Assignment::new(sources),
        }))
    }

    fn third_place_tokens(&self, line: &str) -> Vec<Group> {
        self.third_token_pattern
            .find_iter(line)
            .filter_map(|m| m.as_str().chars().nth(1).and_then(Group::from_char))
            .collect()
    }

    /// Single letters standing on their own, excluding the letter of a `3X` token.
    ///
    /// `regex` has no lookbehind, so the preceding character is checked by hand.
    fn standalone_groups(&self, line: &str) -> Vec<Group> {
        let letters = self
            .standalone_letter_pattern
            .find_iter(line)
            .filter(|m| !line[..m.start()].ends_with('3'))
            .filter_map(|m| m.as_str().chars().next().and_then(Group::from_char));
        dedup_in_order(letters)
    }
}

fn dedup_in_order(groups: impl IntoIterator<Item = Group>) -> Vec<Group> {
    let mut seen = Vec::with_capacity(ADVANCING_GROUPS);
    for group in groups {
        if !seen.contains(&group) {
            seen.push(group);
        }
    }
    seen
}
