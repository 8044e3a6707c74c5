use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveTo,
    ClosePath,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    Arc,
}

impl Command {
    /// Maps a command letter to its command and whether it uses absolute
    /// coordinates.
    pub fn from_letter(letter: char) -> Option<(Command, bool)> {
        let command = match letter.to_ascii_uppercase() {
            'M' => Command::MoveTo,
            'Z' => Command::ClosePath,
            'L' => Command::LineTo,
            'H' => Command::HorizontalLineTo,
            'V' => Command::VerticalLineTo,
            'C' => Command::CurveTo,
            'S' => Command::SmoothCurveTo,
            'Q' => Command::QuadraticCurveTo,
            'T' => Command::SmoothQuadraticCurveTo,
            'A' => Command::Arc,
            _ => return None,
        };
        Some((command, letter.is_ascii_uppercase()))
    }

    /// Uppercase letter of the command.
    pub fn letter(self) -> char {
        match self {
            Command::MoveTo => 'M',
            Command::ClosePath => 'Z',
            Command::LineTo => 'L',
            Command::HorizontalLineTo => 'H',
            Command::VerticalLineTo => 'V',
            Command::CurveTo => 'C',
            Command::SmoothCurveTo => 'S',
            Command::QuadraticCurveTo => 'Q',
            Command::SmoothQuadraticCurveTo => 'T',
            Command::Arc => 'A',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter() {
        assert_eq!(Command::from_letter('M'), Some((Command::MoveTo, true)));
        assert_eq!(Command::from_letter('t'), Some((Command::SmoothQuadraticCurveTo, false)));
        assert_eq!(Command::from_letter('e'), None);
    }

    #[test]
    fn test_every_letter_is_command() {
        for letter in "MmZzLlHhVvCcSsQqTtAa".chars() {
            let (command, absolute) = Command::from_letter(letter).unwrap();
            assert_eq!(command.letter(), letter.to_ascii_uppercase());
            assert_eq!(absolute, letter.is_ascii_uppercase());
        }
        assert_eq!(Command::from_letter('E'), None);
        assert_eq!(Command::from_letter(','), None);
        assert_eq!(Command::from_letter('\u{c3}'), None);
    }
}
