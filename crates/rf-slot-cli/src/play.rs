//! Interactive betting loop

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use rf_reels::{Bet, SlotMachine, Wager};

use crate::prompt::Prompter;
use crate::render;
use crate::session::Session;

/// Run a full sitting: deposit, rounds until broke or done, final balance
///
/// Returns the session so callers can inspect the final state.
pub fn run<R, W, G>(
    machine: &SlotMachine,
    prompter: &mut Prompter<R, W>,
    rng: &mut G,
) -> Result<Option<Session>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let Some(deposit) = prompter.deposit(machine.limits())? else {
        return Ok(None);
    };
    let mut session = Session::new(deposit);

    loop {
        if !play_round(machine, prompter, &mut session, rng)? {
            break;
        }

        let out = prompter.output();
        writeln!(out, "Total Balance: {}", render::money(session.balance()))?;
        if session.is_broke() {
            writeln!(out, "You are out of money.")?;
            break;
        }
        if !prompter.keep_playing()? {
            break;
        }
    }

    writeln!(
        prompter.output(),
        "You left with {}",
        render::money(session.balance())
    )?;
    Ok(Some(session))
}

/// One round; `false` if input closed before the wager was placed
fn play_round<R, W, G>(
    machine: &SlotMachine,
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
    rng: &mut G,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let Some(lines) = prompter.lines(machine.max_lines())? else {
        return Ok(false);
    };
    let Some(bet) = prompter.bet(machine.limits(), lines.len(), session.balance())? else {
        return Ok(false);
    };
    let wager = machine.place_wager(lines, bet, session.balance())?;

    let out = prompter.output();
    writeln!(out, "You are betting {} on each line.", render::money(bet.amount()))?;
    writeln!(
        out,
        "Lines: {} (Total: {})",
        render::lines(wager.lines()),
        wager.lines().len()
    )?;
    writeln!(out, "Total Bet: {}", render::money(wager.total()))?;

    let result = machine.play(&wager, rng)?;
    write!(out, "{}", result.grid)?;
    writeln!(
        out,
        "You won {}. Net earnings: {}",
        render::money(result.winnings),
        render::money(result.net)
    )?;
    writeln!(out, "Winning rows: {}", render::lines(&result.winning_lines))?;

    session.settle(&result)?;
    Ok(true)
}

/// Wager helper for non-interactive callers
pub fn fixed_wager(machine: &SlotMachine, lines: &str, bet: &str) -> Result<Wager> {
    let lines = rf_reels::parse_lines(lines, machine.max_lines())?;
    let bet: Bet = bet.parse()?;
    machine.limits().check_bet(bet)?;
    Ok(Wager::new(lines, bet)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_reels::{Money, seeded_rng};
    use std::io::Cursor;

    #[test]
    fn test_full_sitting() {
        let machine = SlotMachine::classic().unwrap();
        let input = "1000\n1 2 3\n100\nn\n";
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut rng = seeded_rng(Some(1));

        let session = run(&machine, &mut prompter, &mut rng).unwrap().unwrap();
        assert_eq!(session.stats().total_rounds, 1);
        assert_eq!(
            session.balance(),
            Money::from(1000) + session.stats().net()
        );

        let out = String::from_utf8(prompter.output().clone()).unwrap();
        assert!(out.contains("You are betting $100.00 on each line."));
        assert!(out.contains("Lines: 1 2 3 (Total: 3)"));
        assert!(out.contains("Total Bet: $300.00"));
        assert!(out.contains("You left with"));
    }

    #[test]
    fn test_stops_when_input_closes() {
        let machine = SlotMachine::classic().unwrap();
        let mut prompter = Prompter::new(Cursor::new(b"500\n".to_vec()), Vec::new());
        let mut rng = seeded_rng(Some(2));

        let session = run(&machine, &mut prompter, &mut rng).unwrap().unwrap();
        assert_eq!(session.balance(), Money::from(500));
        assert_eq!(session.stats().total_rounds, 0);
    }

    #[test]
    fn test_fixed_wager() {
        let machine = SlotMachine::classic().unwrap();
        let wager = fixed_wager(&machine, "1 3", "250").unwrap();
        assert_eq!(wager.total(), Money::from(500));

        assert!(fixed_wager(&machine, "4", "250").is_err());
        assert!(fixed_wager(&machine, "1", "5").is_err());
    }
}
