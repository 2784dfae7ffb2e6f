//! Conversation-group splitting and tier inheritance for continuation lines.

/// Line prefix that opens a conversation group.
pub const BEGIN_MARKER: &str = "@Bg:\tConversation";
/// Line prefix that closes a conversation group.
pub const END_MARKER: &str = "@Eg:\tConversation";
/// Token appended to continuation lines when they inherit a tier prefix.
pub const CONTINUATION_MARK: &str = "   MULTILINE";

/// Split transcript text into conversation groups. Both delimiter lines are
/// kept inside the group they bound; lines outside any group are dropped, and
/// an unterminated trailing group is discarded.
pub fn split_conversations(text: &str) -> Vec<Vec<String>> {
    let mut conversations = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.starts_with(BEGIN_MARKER) {
            current.push(line.to_string());
            continue;
        }
        if !current.is_empty() {
            current.push(line.to_string());
        }
        if line.starts_with(END_MARKER) {
            conversations.push(std::mem::take(&mut current));
        }
    }

    conversations
}

/// First `n` chars of a line, or the whole line if shorter.
fn prefix(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// Re-process split groups: drop `%` metadata and `@` marker lines, keep tier
/// lines verbatim, and rewrite any other line by prepending the last tier
/// prefix seen and appending the continuation mark.
///
/// The accumulator carries across groups within one call, so a group opening
/// with a continuation line inherits the previous group's final tier. Before
/// any tier line at all, the inherited prefix is empty - no fallback tier is
/// substituted.
pub fn filter_conversations(conversations: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut filtered = Vec::with_capacity(conversations.len());
    let mut last_tier = String::new();

    for conversation in conversations {
        let mut group = Vec::new();
        for line in conversation {
            if line.starts_with('%') || line.starts_with('@') {
                continue;
            }
            if line.starts_with('*') {
                last_tier = prefix(line, 4).to_string();
                group.push(line.clone());
            } else {
                group.push(format!("{}{}{}", last_tier, line, CONTINUATION_MARK));
            }
        }
        filtered.push(group);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "@UTF8\n\
@Begin\n\
@Bg:\tConversation 1\n\
*CHI:\thello . \u{15}100_900\u{15}\n\
%xcom:\tbabbling\n\
\tmore words . \u{15}900_1500\u{15}\n\
@Eg:\tConversation 1\n\
*FAN:\toutside any group .\n\
@Bg:\tConversation 2\n\
*MAN:\tok . \u{15}2000_3500\u{15}\n\
@Eg:\tConversation 2\n\
@End\n";

    #[test]
    fn splits_into_delimited_groups() {
        let groups = split_conversations(SAMPLE);
        assert_eq!(groups.len(), 2);
        assert!(groups[0][0].starts_with(BEGIN_MARKER));
        assert!(groups[0].last().unwrap().starts_with(END_MARKER));
        assert_eq!(groups[0].len(), 5);
        assert_eq!(groups[1].len(), 3);
    }

    #[test]
    fn drops_lines_outside_groups_and_unterminated_tail() {
        let groups = split_conversations("*CHI:\tstray\n@Bg:\tConversation 1\n*CHI:\topen\n");
        assert!(groups.is_empty());
    }

    #[test]
    fn continuation_lines_inherit_the_last_tier() {
        let groups = split_conversations(SAMPLE);
        let filtered = filter_conversations(&groups);
        assert_eq!(filtered[0].len(), 2);
        assert!(filtered[0][0].starts_with("*CHI:"));
        assert!(filtered[0][1].starts_with("*CHI"));
        assert!(filtered[0][1].ends_with(CONTINUATION_MARK));
    }

    #[test]
    fn metadata_and_marker_lines_are_dropped() {
        let groups = split_conversations(SAMPLE);
        let filtered = filter_conversations(&groups);
        for group in &filtered {
            for line in group {
                assert!(!line.starts_with('%'));
                assert!(!line.starts_with('@'));
            }
        }
    }

    #[test]
    fn tier_carries_across_groups() {
        let text = "@Bg:\tConversation 1\n\
*CHI:\tfirst . \u{15}0_500\u{15}\n\
@Eg:\tConversation 1\n\
@Bg:\tConversation 2\n\
\torphan continuation . \u{15}600_900\u{15}\n\
@Eg:\tConversation 2\n";
        let filtered = filter_conversations(&split_conversations(text));
        assert!(filtered[1][0].starts_with("*CHI"));
        assert!(filtered[1][0].ends_with(CONTINUATION_MARK));
    }

    #[test]
    fn continuation_before_any_tier_keeps_an_empty_prefix() {
        let text = "@Bg:\tConversation 1\n\
\tno tier yet . \u{15}0_500\u{15}\n\
@Eg:\tConversation 1\n";
        let filtered = filter_conversations(&split_conversations(text));
        assert!(filtered[0][0].starts_with("\tno tier yet"));
        assert!(filtered[0][0].ends_with(CONTINUATION_MARK));
    }
}
