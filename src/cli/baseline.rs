// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{Parser, Subcommand};

use crate::{
    baseline::{decode_baseline, encode_baseline},
    TartGeometryError,
};

#[derive(Parser, Debug)]
pub struct BaselineArgs {
    #[clap(subcommand)]
    command: BaselineCommand,
}

#[derive(Subcommand, Debug)]
#[clap(arg_required_else_help = true)]
enum BaselineCommand {
    /// Print the identifier of an antenna pair. The order of the antennas
    /// doesn't matter.
    Encode { a1: usize, a2: usize },

    /// Print the (smaller, larger) antenna pair of an identifier.
    Decode { id: u32 },
}

impl BaselineArgs {
    pub(super) fn run(self) -> Result<(), TartGeometryError> {
        match self.command {
            BaselineCommand::Encode { a1, a2 } => println!("{}", encode_baseline(a1, a2)?),
            BaselineCommand::Decode { id } => {
                let (a1, a2) = decode_baseline(id)?;
                println!("{a1}\t{a2}");
            }
        }
        Ok(())
    }
}
