//! Line-based prompt loop that drives an [`EntryForm`] from a terminal.

use std::io::{BufRead, Write};

use pantry_core::dates::{format_date_with, parse_date_with};
use pantry_core::{CategoryOption, EntryForm, IngredientRecord, PantryError, PantryResult, StorageState};

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn say(&mut self, text: &str) -> PantryResult<()> {
        writeln!(self.output, "{}", text).map_err(io_error)
    }

    /// Returns the trimmed answer; `None` on end of input.
    fn ask(&mut self, prompt: &str) -> PantryResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Numbered menu. Blank answer means "none"; end of input too.
    fn choose<'o>(&mut self, title: &str, options: &'o [CategoryOption]) -> PantryResult<Option<&'o CategoryOption>> {
        self.say(title)?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("  {:>2}. {}", i + 1, option.label))?;
        }
        loop {
            let Some(answer) = self.ask("Choice [none]: ")? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(&options[n - 1])),
                _ => self.say(&format!("Enter a number between 1 and {}", options.len()))?,
            }
        }
    }

    /// Walk the user through every field and return the submitted record.
    pub fn run(&mut self, mut form: EntryForm<'_>) -> PantryResult<IngredientRecord> {
        let date_format = form.settings().date_format.clone();
        let show = |date| format_date_with(date, &date_format);

        let categories = form.catalog().categories();
        let category = self.choose("Category:", categories)?.cloned();
        form.select_category(category);

        let subs = form.sub_category_options();
        if !subs.is_empty() {
            if let Some(sub) = self.choose("Subcategory:", subs)? {
                form.select_sub_category(Some(sub.clone()))?;
            }
        }

        let current = form.state().item_name().to_string();
        if let Some(name) = self.ask(&format!("Name [{}]: ", current))? {
            if !name.is_empty() {
                form.set_item_name(name);
            }
        }

        loop {
            let default = form.state().storage();
            let Some(answer) = self.ask(&format!("Storage (refrigerated/frozen) [{}]: ", default))? else {
                break;
            };
            if answer.is_empty() {
                break;
            }
            match StorageState::from_str_flexible(&answer) {
                Ok(storage) => {
                    form.set_storage(storage);
                    break;
                }
                Err(e) => self.say(&e.to_string())?,
            }
        }

        loop {
            let prompt = format!(
                "Purchase date (<= {}) [{}]: ",
                show(form.purchase_date_max()),
                show(form.state().purchase_date())
            );
            let Some(answer) = self.ask(&prompt)? else {
                break;
            };
            if answer.is_empty() {
                break;
            }
            match parse_date_with(&answer, &date_format).and_then(|date| form.set_purchase_date(date)) {
                Ok(()) => break,
                Err(e) if e.is_rejected_edit() => self.say(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }

        let prompt = format!(
            "Expiration date (>= {}) [none]: ",
            show(form.expiration_date_min())
        );
        loop {
            let Some(answer) = self.ask(&prompt)? else {
                break;
            };
            if answer.is_empty() {
                break;
            }
            match parse_date_with(&answer, &date_format) {
                Ok(date) => {
                    form.set_expiration_date(date);
                    break;
                }
                Err(e) => self.say(&e.to_string())?,
            }
        }

        form.submit()
    }
}

fn io_error(e: std::io::Error) -> PantryError {
    PantryError::file_error("prompt", "terminal", e.to_string())
}
