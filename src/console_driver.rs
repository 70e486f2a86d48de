use anyhow::anyhow;
use codespan_reporting::files::{Files, SimpleFiles};
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::term::{self, Config, DisplayStyle};
use log::error;

use wisp_common::message::{File, Messages};
use wisp_common::{Driver, Mode};

pub struct ConsoleDriver {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: Config,
    mode: Option<Mode>,
}

impl ConsoleDriver {
    pub fn new(mode: Option<Mode>) -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: Config {
                display_style: DisplayStyle::Rich,
                ..Default::default()
            },
            mode,
        }
    }

    pub fn add_file(&mut self, name: String, source: String) -> File {
        self.files.add(name, source)
    }

    pub fn name(&self, file: File) -> anyhow::Result<String> {
        self.files
            .name(file)
            .map_err(|err| anyhow!("unknown file {file}: {err}"))
    }
}

impl Driver for ConsoleDriver {
    fn report(&mut self, messages: Messages) {
        for msg in messages.msgs {
            if let Err(err) = term::emit(&mut self.writer, &self.config, &self.files, &msg) {
                error!("could not emit diagnostic: {err}");
            }
        }
    }

    fn inference(&mut self) -> Option<Mode> {
        self.mode
    }
}
