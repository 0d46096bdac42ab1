// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Pretty printers for reporting information.
use std::borrow::Cow;

const VERTICAL: char = '│';
const UP_AND_RIGHT: char = '└';
const VERTICAL_AND_RIGHT: char = '├';

pub(crate) struct InfoPrinter {
    title: Cow<'static, str>,
    blocks: Vec<Vec<Cow<'static, str>>>,
}

impl InfoPrinter {
    pub(crate) fn new(title: Cow<'static, str>) -> Self {
        Self {
            title,
            blocks: vec![],
        }
    }

    pub(crate) fn push_line(&mut self, line: Cow<'static, str>) {
        self.blocks.push(vec![line]);
    }

    pub(crate) fn push_block(&mut self, block: Vec<Cow<'static, str>>) {
        self.blocks.push(block);
    }

    /// The lines that [`InfoPrinter::display`] logs, without the title.
    fn lines(self) -> Vec<String> {
        let num_blocks = self.blocks.len();
        let mut lines = vec![];
        for (i_block, block) in self.blocks.into_iter().enumerate() {
            let num_lines = block.len();
            for (i_line, line) in block.into_iter().enumerate() {
                let symbol = match (i_line, i_line + 1 == num_lines, i_block + 1 == num_blocks) {
                    (0, false, _) => VERTICAL_AND_RIGHT,
                    (0, _, false) => VERTICAL_AND_RIGHT,
                    (0, true, true) => UP_AND_RIGHT,
                    _ => VERTICAL,
                };
                lines.push(format!("{symbol} {line}"));
            }
        }
        lines
    }

    pub(crate) fn display(mut self) {
        let title = std::mem::take(&mut self.title);
        log::info!("{}", console::style(title).bold());
        for line in self.lines() {
            log::info!("{line}");
        }
        log::info!("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_symbols() {
        let mut printer = InfoPrinter::new("title".into());
        printer.push_line("a".into());
        printer.push_block(vec!["b".into(), "c".into()]);
        printer.push_line("d".into());
        assert_eq!(printer.lines(), ["├ a", "├ b", "│ c", "└ d"]);
    }
}
