//! Input prompts with validation and re-prompting

use std::io::{self, BufRead, Write};

use rf_reels::{Bet, BetLimits, Line, Money, ValidationError, parse_amount, parse_lines};

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Ask once; `None` when input is closed
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Result<T, ValidationError>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}. Try again.")?,
            }
        }
    }

    /// Opening deposit, at least the minimum bet
    pub fn deposit(&mut self, limits: &BetLimits) -> io::Result<Option<Money>> {
        self.ask_until("How much money would you like to deposit? ", |answer| {
            limits.check_deposit(parse_amount(answer)?)
        })
    }

    /// Lines to bet on, 1 through `max_lines`
    pub fn lines(&mut self, max_lines: usize) -> io::Result<Option<Vec<Line>>> {
        let question = format!(
            "Which lines would you like to bet on (1 - {max_lines})? \
             Put a space between each line number, e.g. 1 3: "
        );
        self.ask_until(&question, |answer| parse_lines(answer, max_lines))
    }

    /// Bet per line, within limits and covered by `balance` across `line_count` lines
    pub fn bet(
        &mut self,
        limits: &BetLimits,
        line_count: usize,
        balance: Money,
    ) -> io::Result<Option<Bet>> {
        let question = format!(
            "How much money would you like to bet on each line (${} - ${})? ",
            limits.min_bet, limits.max_bet
        );
        self.ask_until(&question, |answer| {
            let bet: Bet = answer.parse()?;
            limits.check_bet(bet)?;
            limits.check_affordable(bet, line_count, balance)?;
            Ok(bet)
        })
    }

    /// Y/N; closed input counts as no
    pub fn keep_playing(&mut self) -> io::Result<bool> {
        loop {
            let Some(answer) = self.ask("Would you like to continue playing? (Y/N): ")? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "That is not an accepted answer. Try again.")?,
            }
        }
    }
}
