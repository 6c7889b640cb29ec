//! cppjieba形式のHMMモデルファイルのパーサー

use hashbrown::HashMap;

use crate::errors::{Result, SegmenterError};
use crate::hmm::HmmModel;

const NAME: &str = "hmm_model";

fn parse_probs<const N: usize>(line: &str) -> Result<[f64; N]> {
    let mut probs = [0.0; N];
    let mut fields = line.split_whitespace();
    for p in probs.iter_mut() {
        let field = fields.next().ok_or_else(|| {
            SegmenterError::invalid_format(NAME, format!("expected {} values: {}", N, line))
        })?;
        *p = field.parse()?;
    }
    if fields.next().is_some() {
        return Err(SegmenterError::invalid_format(
            NAME,
            format!("expected {} values: {}", N, line),
        ));
    }
    Ok(probs)
}

fn parse_emit(line: &str) -> Result<HashMap<char, f64>> {
    let mut emit = HashMap::new();
    for pair in line.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        // The character itself may be ':', so split after the first char.
        let mut it = pair.chars();
        let c = it.next().ok_or_else(|| {
            SegmenterError::invalid_format(NAME, format!("empty emission pair in: {line}"))
        })?;
        let prob = it.as_str().strip_prefix(':').ok_or_else(|| {
            SegmenterError::invalid_format(NAME, format!("invalid emission pair: {pair}"))
        })?;
        emit.insert(c, prob.trim().parse()?);
    }
    Ok(emit)
}

pub(super) fn parse(text: &str) -> Result<HmmModel> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    if lines.len() != 9 {
        return Err(SegmenterError::invalid_format(
            NAME,
            format!(
                "expected 9 data lines (start, 4 transitions, 4 emissions), found {}",
                lines.len()
            ),
        ));
    }

    let start = parse_probs::<4>(lines[0])?;
    let mut trans = [[0.0; 4]; 4];
    for (row, line) in trans.iter_mut().zip(&lines[1..5]) {
        *row = parse_probs::<4>(line)?;
    }
    let emit = [
        parse_emit(lines[5])?,
        parse_emit(lines[6])?,
        parse_emit(lines[7])?,
        parse_emit(lines[8])?,
    ];

    Ok(HmmModel::with_params(start, trans, emit))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::hmm::State;

    const MODEL: &str = "\
#the start prob of B E M S
-0.26268660809250016 -3.14e+100 -3.14e+100 -1.4652633398537678
#the transition prob of B E M S
-3.14e+100 -0.510825623765990 -0.916290731874155 -3.14e+100
-0.5897149736854513 -3.14e+100 -3.14e+100 -0.8085250474669937
-3.14e+100 -0.33344856811948514 -1.2603623820268226 -3.14e+100
-0.7211965654669841 -3.14e+100 -3.14e+100 -0.6658631448798212
#prob emit B
耀:-10.460283,涉:-8.766406
#prob emit E
耀:-9.098079,涉:-9.008873
#prob emit M
耀:-11.5,:: -5.0
#prob emit S
\u{4e00}:-5.5,
";

    #[test]
    fn test_parse() {
        let model = parse(MODEL).unwrap();
        assert_eq!(model.start_prob(State::B), -0.26268660809250016);
        assert_eq!(model.start_prob(State::M), -3.14e100);
        assert_eq!(model.trans_prob(State::B, State::E), -0.510825623765990);
        assert_eq!(model.trans_prob(State::S, State::S), -0.6658631448798212);
        assert_eq!(model.emit_prob(State::B, '涉'), -8.766406);
        assert_eq!(model.emit_prob(State::E, '耀'), -9.098079);
        assert_eq!(model.emit_prob(State::M, ':'), -5.0);
        assert_eq!(model.emit_prob(State::S, '一'), -5.5);
    }

    #[test]
    fn test_missing_lines() {
        let text = MODEL.lines().take(10).collect::<Vec<_>>().join("\n");
        assert!(matches!(
            parse(&text),
            Err(SegmenterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_wrong_number_of_values() {
        let text = MODEL.replacen("-3.14e+100 -1.4652633398537678", "-3.14e+100", 1);
        assert!(matches!(
            parse(&text),
            Err(SegmenterError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_emission() {
        let text = MODEL.replacen("耀:-10.460283", "耀=-10.460283", 1);
        assert!(parse(&text).is_err());
        let text = MODEL.replacen("耀:-10.460283", "耀:abc", 1);
        assert!(matches!(parse(&text), Err(SegmenterError::ParseFloat(_))));
    }
}
