//! Shorthand notation parser.
//!
//! A scorer types one short string per plate appearance (`1B`, `K`,
//! `HR 2RBI`, `FC OUT`, `1B E6`, `K PC2`, ...). Checks are substring based
//! and run in a fixed order; later checks overwrite fields written by
//! earlier ones. Malformed input such as `1B 2B` silently keeps the last hit
//! type matched.

use regex::Regex;
use std::sync::OnceLock;

use super::outcome::AtBatOutcome;

fn pitcher_change_re() -> &'static Regex {
    static PC_RE: OnceLock<Regex> = OnceLock::new();
    PC_RE.get_or_init(|| {
        Regex::new(r"PC\[?([0-3])\]?").expect("pitching change regex must compile")
    })
}

fn error_fielder_re() -> &'static Regex {
    static E_RE: OnceLock<Regex> = OnceLock::new();
    E_RE.get_or_init(|| Regex::new(r"E\[?([1-9])\]?").expect("error fielder regex must compile"))
}

fn nice_play_fielder_re() -> &'static Regex {
    static NP_RE: OnceLock<Regex> = OnceLock::new();
    NP_RE.get_or_init(|| {
        Regex::new(r"NP\[?([1-9])\]?").expect("nice play fielder regex must compile")
    })
}

/// RBI markers in priority order; the first one present wins.
const RBI_MARKERS: &[(&str, u32)] = &[("4RBI", 4), ("3RBI", 3), ("2RBI", 2), ("RBI", 1)];

/// Parse one at-bat cell. Blank input yields the zero outcome.
pub fn parse_notation(raw: &str) -> AtBatOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return AtBatOutcome::default();
    }

    let upper = trimmed.to_ascii_uppercase();
    let mut outcome = AtBatOutcome::default();

    // Pitching change: strip the token so the rest reads as a normal cell.
    let text = match pitcher_change_re().captures(&upper) {
        Some(caps) => {
            outcome.is_pitcher_change = true;
            outcome.inherited_runners = digit(&caps[1]);
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let rest = format!("{}{}", &upper[..whole.start], &upper[whole.end..]);
            let rest = rest.trim().to_string();
            if rest.is_empty() {
                return outcome;
            }
            rest
        }
        None => upper,
    };
    let text = text.as_str();

    let mut fielder_token = false;
    if let Some(caps) = error_fielder_re().captures(text) {
        outcome.is_error = true;
        outcome.fielder_position = Some(digit(&caps[1]) as u8);
        fielder_token = true;
    }
    let mut nice_play_token = false;
    if let Some(caps) = nice_play_fielder_re().captures(text) {
        outcome.is_nice_play = true;
        outcome.fielder_position = Some(digit(&caps[1]) as u8);
        nice_play_token = true;
    }

    outcome.batters_faced = 1;

    if text.contains("1B") {
        outcome.hits_allowed = 1;
        outcome.total_bases = 1;
    }
    if text.contains("2B") {
        outcome.hits_allowed = 1;
        outcome.total_bases = 2;
    }
    if text.contains("3B") {
        outcome.hits_allowed = 1;
        outcome.total_bases = 3;
    }
    if text.contains("HR") {
        outcome.hits_allowed = 1;
        outcome.home_runs_allowed = 1;
        outcome.total_bases = 4;
    }

    let is_walk = text.contains("BB");
    if is_walk {
        outcome.walks_allowed = 1;
    }

    if text.contains('K') {
        outcome.strikeouts = 1;
    }

    if text.contains("FC") {
        if text.contains("FC OUT") || text.contains("FCOUT") {
            outcome.outs_recorded = 1;
        } else {
            outcome.fielders_choice_no_out = true;
        }
    }

    let is_sacrifice = text.contains("SF") || text.contains("SH");
    if is_sacrifice {
        outcome.outs_recorded = 1;
    }

    // Triple plays share the double-play flag.
    if text.contains("TP") {
        outcome.outs_recorded = 3;
        outcome.double_play = true;
    } else if text.contains("DP") {
        outcome.outs_recorded = 2;
        outcome.double_play = true;
    } else if (text.contains("OUT") || outcome.strikeouts == 1) && outcome.outs_recorded == 0 {
        outcome.outs_recorded = 1;
    }

    if text.contains("SB") {
        outcome.stolen_base = true;
    }
    if text.contains("CS") {
        outcome.caught_stealing = true;
        outcome.outs_recorded += 1;
    }

    if let Some((_, runs)) = RBI_MARKERS.iter().find(|(marker, _)| text.contains(marker)) {
        outcome.runs_allowed = *runs;
    }

    outcome.at_bats = if is_walk || is_sacrifice { 0 } else { 1 };

    if !nice_play_token && text.contains("NP") {
        outcome.nice_play_occurred = true;
    }
    if !fielder_token && text.split_whitespace().any(|token| token == "E") {
        outcome.error_occurred = true;
    }

    outcome
}

fn digit(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::parse_notation;

    #[test]
    fn test_blank_input_is_zero_outcome() {
        for raw in ["", " ", "\t\n", "   "] {
            assert!(parse_notation(raw).is_empty(), "{raw:?}");
        }
    }

    #[test]
    fn test_home_run_with_rbi() {
        let o = parse_notation("HR 4RBI");
        assert_eq!(o.hits_allowed, 1);
        assert_eq!(o.home_runs_allowed, 1);
        assert_eq!(o.total_bases, 4);
        assert_eq!(o.runs_allowed, 4);
        assert_eq!(o.at_bats, 1);
        assert_eq!(o.batters_faced, 1);
    }

    #[test]
    fn test_combined_strikeout_and_pitching_change() {
        let o = parse_notation("K PC2");
        assert_eq!(o.strikeouts, 1);
        assert_eq!(o.outs_recorded, 1);
        assert_eq!(o.at_bats, 1);
        assert_eq!(o.batters_faced, 1);
        assert!(o.is_pitcher_change);
        assert_eq!(o.inherited_runners, 2);
        assert!(!o.is_standalone_pitcher_change());
    }

    #[test]
    fn test_standalone_pitching_change() {
        let o = parse_notation("PC0");
        assert!(o.is_pitcher_change);
        assert_eq!(o.inherited_runners, 0);
        assert_eq!(o.batters_faced, 0);
        assert_eq!(o.at_bats, 0);
        assert_eq!(o.outs_recorded, 0);
        assert!(o.is_standalone_pitcher_change());
    }

    #[test]
    fn test_bracketed_pitching_change() {
        let o = parse_notation(" pc[3] ");
        assert!(o.is_standalone_pitcher_change());
        assert_eq!(o.inherited_runners, 3);
    }

    #[test]
    fn test_single_with_error() {
        let o = parse_notation("1B E6");
        assert_eq!(o.hits_allowed, 1);
        assert_eq!(o.total_bases, 1);
        assert!(o.is_error);
        assert_eq!(o.fielder_position, Some(6));
        assert_eq!(o.at_bats, 1);
        assert!(!o.error_occurred);
    }

    #[test]
    fn test_triple_play_uses_double_play_flag() {
        let o = parse_notation("TP");
        assert_eq!(o.outs_recorded, 3);
        assert!(o.double_play);
    }

    #[test]
    fn test_double_play() {
        let o = parse_notation("DP");
        assert_eq!(o.outs_recorded, 2);
        assert!(o.double_play);
        assert_eq!(o.at_bats, 1);
    }

    #[test]
    fn test_sacrifice_fly_is_not_an_at_bat() {
        let o = parse_notation("SF RBI");
        assert_eq!(o.outs_recorded, 1);
        assert_eq!(o.runs_allowed, 1);
        assert_eq!(o.at_bats, 0);
        assert_eq!(o.batters_faced, 1);
    }

    #[test]
    fn test_walk_is_not_an_at_bat() {
        let o = parse_notation("bb");
        assert_eq!(o.walks_allowed, 1);
        assert_eq!(o.at_bats, 0);
        assert_eq!(o.outs_recorded, 0);
    }

    #[test]
    fn test_fielders_choice() {
        let safe = parse_notation("FC");
        assert!(safe.fielders_choice_no_out);
        assert_eq!(safe.outs_recorded, 0);
        assert_eq!(safe.at_bats, 1);

        for raw in ["FC OUT", "fcout"] {
            let out = parse_notation(raw);
            assert!(!out.fielders_choice_no_out, "{raw}");
            assert_eq!(out.outs_recorded, 1, "{raw}");
        }
    }

    #[test]
    fn test_generic_out_does_not_stack_on_sacrifice() {
        let o = parse_notation("SH OUT");
        assert_eq!(o.outs_recorded, 1);
        assert_eq!(o.at_bats, 0);
    }

    #[test]
    fn test_caught_stealing_adds_an_out() {
        let o = parse_notation("K CS");
        assert_eq!(o.outs_recorded, 2);
        assert!(o.caught_stealing);

        let o = parse_notation("1B SB");
        assert!(o.stolen_base);
        assert_eq!(o.outs_recorded, 0);
    }

    #[test]
    fn test_rbi_priority() {
        assert_eq!(parse_notation("2B 2RBI").runs_allowed, 2);
        assert_eq!(parse_notation("3B 3RBI").runs_allowed, 3);
        assert_eq!(parse_notation("1B RBI").runs_allowed, 1);
        assert_eq!(parse_notation("1B").runs_allowed, 0);
    }

    #[test]
    fn test_later_hit_check_wins() {
        let o = parse_notation("1B 2B");
        assert_eq!(o.hits_allowed, 1);
        assert_eq!(o.total_bases, 2);
    }

    #[test]
    fn test_nice_play_overwrites_error_fielder() {
        let o = parse_notation("OUT E5 NP[8]");
        assert!(o.is_error);
        assert!(o.is_nice_play);
        assert_eq!(o.fielder_position, Some(8));
        assert_eq!(o.outs_recorded, 1);
    }

    #[test]
    fn test_legacy_flags() {
        let o = parse_notation("OUT NP");
        assert!(o.nice_play_occurred);
        assert!(!o.is_nice_play);
        assert_eq!(o.fielder_position, None);

        let o = parse_notation("1B E");
        assert!(o.error_occurred);
        assert!(!o.is_error);

        assert!(parse_notation("E").error_occurred);
        assert!(parse_notation("E 1B").error_occurred);
        assert!(!parse_notation("1BE").error_occurred);
        assert!(!parse_notation("NP4").nice_play_occurred);
    }

    #[test]
    fn test_legacy_flags_are_gated_separately() {
        // A bare E next to a fielder nice play keeps both.
        let o = parse_notation("E NP4");
        assert!(o.error_occurred);
        assert!(!o.is_error);
        assert!(o.is_nice_play);
        assert!(!o.nice_play_occurred);
        assert_eq!(o.fielder_position, Some(4));

        let o = parse_notation("NP E6");
        assert!(o.nice_play_occurred);
        assert!(!o.is_nice_play);
        assert!(o.is_error);
        assert!(!o.error_occurred);
        assert_eq!(o.fielder_position, Some(6));
    }

    #[test]
    fn test_unrecognized_token_is_plain_at_bat() {
        let o = parse_notation("zzz");
        assert_eq!(o.batters_faced, 1);
        assert_eq!(o.at_bats, 1);
        assert_eq!(o.outs_recorded, 0);
        assert_eq!(o.hits_allowed, 0);
    }
}
