//! Static import extraction from source text.
//!
//! This is a heuristic scanner, not a parser: lines are whitespace-split and
//! only the two plain statement shapes `import a, b` and `from a import b`
//! are recognized. Unusual formatting (imports built at runtime, strings
//! containing the keywords) can misparse; that is an accepted limitation.

use crate::name::ModuleName;

/// Extract the imported module names from one file's text.
///
/// Line-continuation backslashes are removed first so logical statements
/// split across physical lines are reassembled. The result preserves
/// first-seen order and contains no duplicates.
pub fn scan_imports(text: &str) -> Vec<ModuleName> {
    let text = text.replace("\\\r\n", "").replace("\\\n", "");
    let mut targets: Vec<ModuleName> = Vec::new();

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&"import") => {
                // `import a.b as x, c` - one comma-separated clause per
                // target, the first word of each clause drops alias text.
                for clause in tokens[1..].join(" ").split(',') {
                    let Some(raw) = clause.split_whitespace().next() else {
                        continue;
                    };
                    push_target(&mut targets, raw);
                }
            }
            Some(&"from") if tokens.len() >= 3 && tokens[2] == "import" => {
                // `from a.b import c` - only the source module matters.
                push_target(&mut targets, tokens[1]);
            }
            _ => {}
        }
    }

    targets
}

fn push_target(targets: &mut Vec<ModuleName>, raw: &str) {
    if let Some(name) = ModuleName::from_dotted(raw) {
        if !targets.contains(&name) {
            targets.push(name);
        }
    }
}
