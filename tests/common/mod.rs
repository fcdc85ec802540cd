#![allow(dead_code)]

/// Every 8-of-12 group combination, in mask order.
pub fn combinations() -> Vec<Vec<char>> {
    (0u16..1 << 12)
        .filter(|mask| mask.count_ones() == 8)
        .map(|mask| {
            ('A'..='L')
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, letter)| letter)
                .collect()
        })
        .collect()
}

/// Formats a table line the way the pasted source lays it out.
pub fn table_line(number: usize, groups: &[char]) -> String {
    let letters: Vec<String> = groups.iter().map(|g| g.to_string()).collect();
    // Rotate so the slot column order differs from the group column
    let tokens: Vec<String> = groups
        .iter()
        .cycle()
        .skip(number % groups.len())
        .take(groups.len())
        .map(|g| format!("3{}", g))
        .collect();
    format!("{} | {} | {}", number, letters.join(" "), tokens.join(" "))
}

/// A table with a header, a blank line, and the first `rows` combinations.
pub fn table(rows: usize) -> String {
    let mut lines = vec![
        "Third-placed teams qualify from groups".to_string(),
        "# | Groups | 1A 1B 1D 1E 1G 1I 1K 1L".to_string(),
        String::new(),
    ];
    for (index, groups) in combinations().iter().take(rows).enumerate() {
        lines.push(table_line(index + 1, groups));
    }
    lines.join("\n")
}
