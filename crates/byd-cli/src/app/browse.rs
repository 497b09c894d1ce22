//! Browse mode: the paginated word table.

use byd_core::DictionaryStore;
use byd_core::layout::{message_box, render_page};
use rand::Rng;
use tracing::debug;

use super::{App, read_choice};
use crate::console::Console;
use crate::error::Result;

const BROWSE_KEYS: [char; 4] = ['j', 'k', 's', 'q'];

impl<C, S, R> App<C, S, R>
where
    C: Console,
    S: DictionaryStore,
    R: Rng,
{
    pub(super) fn browse_mode(&mut self) -> Result<()> {
        if self.dictionary.is_empty() {
            self.console.clear()?;
            self.console.write_lines(&message_box("No words in dictionary."))?;
            return self.console.pause();
        }

        let page_size = self.settings.page_size;
        let total_pages = self.dictionary.total_pages(page_size);
        let mut current = 0;

        loop {
            let lines = render_page(
                &self.dictionary.page(current, page_size),
                self.dictionary.stats(),
                self.dictionary.threshold(),
            );
            self.console.clear()?;
            self.console.write_lines(&lines)?;

            match read_choice(&mut self.console, &BROWSE_KEYS)? {
                'j' if current + 1 < total_pages => current += 1,
                'k' if current > 0 => current -= 1,
                's' => {
                    if let Some(page) = self.search_prefix(page_size)? {
                        current = page;
                    }
                }
                'q' => break,
                _ => {}
            }
        }
        Ok(())
    }

    /// Prompts for a prefix and returns the page holding the first match.
    fn search_prefix(&mut self, page_size: usize) -> Result<Option<usize>> {
        self.console.clear()?;
        self.console
            .write_lines(&message_box("SEARCH WORD (Starts with)"))?;
        let term = self.console.read_line("Enter word to search: ")?;
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Ok(None);
        }

        let page = self.dictionary.find_prefix_page(&term, page_size);
        debug!(term = %term, page = ?page, "Prefix search");
        if page.is_none() {
            self.console.write_line("")?;
            self.console
                .write_line(&format!("No word starting with '{term}' found."))?;
            self.console.pause()?;
        }
        Ok(page)
    }
}
