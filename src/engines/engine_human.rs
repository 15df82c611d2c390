//! Interactive move input.
//!
//! Prompts on the output sink, reads one line per attempt, and keeps asking
//! until the text parses and the move is legal for the current position.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use tracing::warn;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::EngineError;
use crate::game_state::game_state::GameState;
use crate::utils::coordinates::parse_move_text;

const PROMPT: &str = "To place a piece, enter the coordinates of a blank space.\n\
To move a piece, enter the coordinates of your own space followed by the coordinates of the target space.\n\
Enter move: ";

pub struct HumanEngine<R: BufRead + Send, W: Write + Send> {
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> HumanEngine<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl HumanEngine<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> Engine for HumanEngine<R, W> {
    fn name(&self) -> &str {
        "Human"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(EngineError::InputClosed);
            }

            let mv = match parse_move_text(line.trim()) {
                Ok(mv) => mv,
                Err(e) => {
                    warn!(input = line.trim(), error = %e, "unparseable move input");
                    writeln!(self.output, "That is not a valid input! Try again.")?;
                    continue;
                }
            };

            if let Err(e) = game_state.check_move(&mv) {
                warn!(input = line.trim(), error = %e, "illegal move input");
                writeln!(self.output, "{e}")?;
                continue;
            }

            return Ok(EngineOutput {
                best_move: Some(mv),
                ..EngineOutput::default()
            });
        }
    }
}
