use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use wisp_common::{Mode, Propagation};

/// a small functional language with type inference.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Show debug logs. `RUST_LOG` takes precedence.
    #[arg(long, action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Print the syntax tree of every source, with types if inferred.
    #[arg(long, action = ArgAction::SetTrue)]
    pub print: bool,

    /// Infer types bottom-up, solving every constraint by unification.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "infer_types_td")]
    pub infer_types: bool,

    /// Infer types top-down, checking against expected types where known.
    #[arg(long, action = ArgAction::SetTrue)]
    pub infer_types_td: bool,

    /// Do not push known parameter types into call arguments.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "infer_types")]
    pub no_propagate_arguments: bool,

    /// Do not push the expected type of a conditional into its arms.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "infer_types")]
    pub no_propagate_branches: bool,

    /// Do not push annotations into the expressions they annotate.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "infer_types")]
    pub no_propagate_annotations: bool,

    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
}

impl Arguments {
    /// The inference discipline to run, if any.
    pub fn mode(&self) -> Option<Mode> {
        if self.infer_types_td {
            Some(Mode::TopDown(Propagation {
                arguments: !self.no_propagate_arguments,
                branches: !self.no_propagate_branches,
                annotations: !self.no_propagate_annotations,
            }))
        } else if self.infer_types {
            Some(Mode::BottomUp)
        } else {
            None
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}
