use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{i32 as integer, multispace0},
    sequence::delimited,
};

#[derive(Debug)]
pub struct BrewCommand {
    pub herbs: i32,
    pub mushrooms: i32,
}

pub fn parse_brew(input: &str) -> IResult<&str, BrewCommand> {
    let (input, _) = delimited(multispace0, tag("brew"), multispace0).parse(input)?;
    let (input, herbs) = delimited(multispace0, integer, multispace0).parse(input)?;
    let (input, mushrooms) = delimited(multispace0, integer, multispace0).parse(input)?;

    Ok((
        input,
        BrewCommand { herbs, mushrooms },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brew() {
        let (rest, command) = parse_brew("brew 3 2").unwrap();
        assert_eq!(rest, "");
        assert_eq!(command.herbs, 3);
        assert_eq!(command.mushrooms, 2);
    }

    #[test]
    fn test_parse_brew_loose_whitespace() {
        let (rest, command) = parse_brew("  brew   5    4  ").unwrap();
        assert_eq!(rest, "");
        assert_eq!(command.herbs, 5);
        assert_eq!(command.mushrooms, 4);
    }

    #[test]
    fn test_parse_brew_negative_counts() {
        let (_, command) = parse_brew("brew -3 2").unwrap();
        assert_eq!(command.herbs, -3);
        assert_eq!(command.mushrooms, 2);
    }

    #[test]
    fn test_parse_rejects_other_verbs() {
        assert!(parse_brew("drink 3 2").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_counts() {
        assert!(parse_brew("brew").is_err());
        assert!(parse_brew("brew 3").is_err());
    }

    #[test]
    fn test_parse_leaves_trailing_input() {
        let (rest, command) = parse_brew("brew 3 2 and stir").unwrap();
        assert_eq!(rest, "and stir");
        assert_eq!(command.herbs, 3);
    }
}
