use std::io::{BufRead, Write};

use maumau::{Action, Card, PlayError, Strategy, Symbol, TurnContext, CHAIN_RANK, SKIP_RANK};

/// The interactive seat. Prompts on stdout, reads decisions from stdin.
///
/// Unparseable input is re-requested right here; decisions the engine
/// rejects come back through [`Strategy::card_rejected`] and are printed
/// before the engine asks again.
pub struct HumanStrategy;

impl HumanStrategy {
    pub fn new() -> Self {
        Self
    }
}

fn ask(question: &str) -> String {
    print!("{} ", question);
    let _ = std::io::stdout().flush();
    let mut buf = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut buf)
        .expect("could not read from stdin");
    buf.trim().to_string()
}

impl Strategy for HumanStrategy {
    fn choose_card(&mut self, hand: &[Card], ctx: &TurnContext<'_>) -> Action {
        let mut prompt = String::from("Your hand is:\n");
        for (index, card) in hand.iter().enumerate() {
            prompt.push_str(&format!("{}: {}\n", index + 1, card));
        }
        prompt.push_str("d: draw\n");
        prompt.push_str(&format!("{} lies on top of the table.", ctx.top_card));
        if ctx.required_face != &ctx.top_card.face {
            prompt.push_str(&format!(" The current face is {}.", ctx.required_face));
        }
        if ctx.top_card.rank.is(CHAIN_RANK) || ctx.top_card.rank.is(SKIP_RANK) {
            if ctx.cards_to_draw > 1 {
                prompt.push_str(&format!(
                    " If you choose to draw, you will have to draw {} cards.",
                    ctx.cards_to_draw
                ));
            } else {
                prompt.push_str(" You are not affected by it.");
            }
        }
        loop {
            println!("{}", prompt);
            let line = ask("Which card do you want to play?");
            if line == "d" {
                return Action::Draw;
            }
            match line.parse::<usize>() {
                Ok(number) if number >= 1 => return Action::Play(number - 1),
                _ => println!("Invalid option!"),
            }
        }
    }

    fn choose_face(
        &mut self,
        hand: &[Card],
        current_face: &Symbol,
        available: &[Symbol],
    ) -> Symbol {
        let mut prompt = String::from("Your hand is:\n");
        for card in hand {
            prompt.push_str(&format!("{}\n", card));
        }
        prompt.push_str("Available faces:\n");
        for (index, face) in available.iter().enumerate() {
            prompt.push_str(&format!("{}: {}\n", index + 1, face));
        }
        prompt.push_str(&format!("{} is the current face.", current_face));
        loop {
            println!("{}", prompt);
            match ask("Which face do you choose?").parse::<usize>() {
                Ok(number) if number >= 1 && number <= available.len() => {
                    return available[number - 1].clone();
                }
                _ => println!("Invalid option!"),
            }
        }
    }

    fn play_drawn_card(&mut self, _hand: &[Card], drawn: &Card) -> bool {
        loop {
            println!("You drew {}.", drawn);
            println!("y - play it");
            println!("n - keep it");
            match ask("What do you want to do?").to_lowercase().as_str() {
                "y" => return true,
                "n" => return false,
                _ => {}
            }
        }
    }

    fn card_rejected(&mut self, reason: &PlayError) {
        println!("{}", reason);
    }
}
