const REASONING_TRIGGERS: [&str; 10] = [
    "is applicable when",
    "applies to cases where",
    "deals with",
    "punishes for",
    "defines",
    "aims to prevent",
    "protects against",
    "is imposed for",
    "the purpose of this section is",
    "this section addresses",
];

const SENTENCE_DELIMITER: &str = ". ";

pub fn explain(title: &str, body: &str) -> String {
    if let Some(sentence) = trigger_sentence(body) {
        return sentence;
    }

    if let Some(sentence) = title_template(title) {
        return sentence;
    }

    let sentences = body.split(SENTENCE_DELIMITER).collect::<Vec<&str>>();
    if sentences.len() > 1 {
        return format!(
            "{}. {}",
            sentences[0].trim(),
            terminate_sentence(sentences[1])
        );
    }
    body.trim().to_string()
}

fn trigger_sentence(body: &str) -> Option<String> {
    let lowered = body.to_lowercase();

    for trigger in REASONING_TRIGGERS {
        if !lowered.contains(trigger) {
            continue;
        }

        let hit = body
            .split(SENTENCE_DELIMITER)
            .find(|sentence| sentence.to_lowercase().contains(trigger));
        if let Some(sentence) = hit {
            return Some(terminate_sentence(sentence));
        }
    }

    None
}

fn title_template(title: &str) -> Option<String> {
    let lowered = title.to_lowercase();

    if lowered.contains("punishment") {
        return Some(format!(
            "This section outlines the punishment for the offense of {}.",
            strip_phrase(&lowered, "punishment for")
        ));
    }
    if lowered.contains("offence") {
        return Some(format!(
            "This section defines the offense of {}.",
            strip_phrase(&lowered, "of offence")
        ));
    }
    if lowered.contains("right") {
        return Some(format!(
            "This section pertains to the right of {}.",
            strip_phrase(&lowered, "right of")
        ));
    }
    if lowered.contains("abetment") {
        return Some(format!(
            "This section deals with the abetment of {}.",
            strip_phrase(&lowered, "abetment of")
        ));
    }

    None
}

fn strip_phrase(title: &str, phrase: &str) -> String {
    title.replace(phrase, "").trim().to_string()
}

fn terminate_sentence(sentence: &str) -> String {
    format!("{}.", sentence.trim().trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::explain;

    #[test]
    fn trigger_phrase_returns_containing_sentence() {
        let body = "Whoever dishonestly takes property commits theft. This section deals with theft from dwellings. Punishment may extend to three years.";
        assert_eq!(
            explain("Theft in dwelling house", body),
            "This section deals with theft from dwellings."
        );
    }

    #[test]
    fn trigger_match_is_case_insensitive_and_keeps_original_casing() {
        let body = "Preamble text. The Purpose Of This Section Is to protect trust";
        assert_eq!(
            explain("Misc", body),
            "The Purpose Of This Section Is to protect trust."
        );
    }

    #[test]
    fn earlier_trigger_in_list_wins_over_earlier_sentence() {
        let body = "It defines hurt. It is applicable when force is used.";
        assert_eq!(explain("Hurt", body), "It is applicable when force is used.");
    }

    #[test]
    fn punishment_title_without_trigger_mentions_offence() {
        let reasoning = explain(
            "Punishment for theft",
            "Whoever commits theft shall be punished with imprisonment.",
        );
        assert_eq!(
            reasoning,
            "This section outlines the punishment for the offense of theft."
        );
        assert!(reasoning.contains("theft"));
    }

    #[test]
    fn title_rules_apply_in_priority_order() {
        assert_eq!(
            explain("Abetment of offence", "No trigger here"),
            "This section defines the offense of abetment."
        );
        assert_eq!(
            explain("Right of private defence of the body", "No trigger here"),
            "This section pertains to the right of private defence of the body."
        );
        assert_eq!(
            explain("Abetment of a thing", "No trigger here"),
            "This section deals with the abetment of a thing."
        );
    }

    #[test]
    fn untemplated_title_summarises_first_two_sentences() {
        let body = "Whoever commits dacoity shall be punished. The fine may be imposed. Other text follows.";
        assert_eq!(
            explain("Dacoity", body),
            "Whoever commits dacoity shall be punished. The fine may be imposed."
        );
    }

    #[test]
    fn single_sentence_body_is_returned_whole() {
        assert_eq!(explain("Dacoity", "  Whoever commits dacoity."), "Whoever commits dacoity.");
        assert_eq!(explain("Dacoity", ""), "");
    }

    #[test]
    fn explain_is_deterministic() {
        let body = "Whoever voluntarily causes hurt. Punishment follows.";
        assert_eq!(explain("Hurt", body), explain("Hurt", body));
    }
}
