use std::io::{self, BufRead, Write};

use hmm_tagger_core::HmmModel;

/// Input line that ends the session.
pub const QUIT: &str = ">q";

/// Tags every line read from `input` until `>q` or end of input.
///
/// Each answer is the space separated tag sequence of the line. A line the
/// model cannot decode is reported and the session goes on.
pub fn run<R: BufRead, W: Write>(model: &HmmModel, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "Type any sentence below. Hit enter to see each part of speech. Type \"{}\" to quit", QUIT)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line == QUIT {
            break;
        }
        if line.is_empty() {
            writeln!(output, "Please type a sentence.")?;
            continue;
        }

        match model.tag_line(line) {
            Ok(tags) => writeln!(output, "{}", tags.join(" "))?,
            Err(e) => {
                log::warn!("failed to tag '{}': {}", line, e);
                writeln!(output, "Could not tag this sentence: {}", e)?;
            }
        }
        output.flush()?;
    }

    Ok(())
}
