use crate::modeline::{ModeDirective, Setting};
use crate::options::EditorOptions;

/// What applying mode directives changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
	/// Settings that differed from the current options, in application order.
	pub changed: Vec<Setting>,
	/// Set when a changed setting cannot be applied to a live view: any
	/// boolean, the theme or the text size.
	pub needs_reconfigure: bool,
	/// Set when highlighting was toggled, so the document must be
	/// re-classified.
	pub highlight_changed: bool,
}

impl ApplyReport {
	pub fn is_empty(&self) -> bool {
		self.changed.is_empty()
	}
}

impl EditorOptions {
	/// Applies mode directives, updating only the fields that differ.
	///
	/// Directives without a usable setting are skipped. When several
	/// directives address the same option the last one wins.
	pub fn apply_directives(&mut self, directives: &[ModeDirective]) -> ApplyReport {
		let mut report = ApplyReport::default();
		for setting in directives.iter().filter_map(ModeDirective::setting) {
			if self.apply_setting(setting) {
				report.needs_reconfigure |= !matches!(setting, Setting::Typeface(_) | Setting::Charset(_));
				report.highlight_changed |= matches!(setting, Setting::Highlight(_));
				report.changed.push(setting);
			}
		}

		if !report.is_empty() {
			tracing::debug!(
				changed = ?report.changed,
				needs_reconfigure = report.needs_reconfigure,
				"Applied mode directives"
			);
		}
		report
	}

	/// Applies one setting, returning true if it changed anything.
	pub fn apply_setting(&mut self, setting: Setting) -> bool {
		fn set<T: PartialEq>(field: &mut T, value: T) -> bool {
			let changed = *field != value;
			*field = value;
			changed
		}

		match setting {
			Setting::ViewOnly(on) => set(&mut self.view_only, on),
			Setting::Wrap(on) => set(&mut self.wrap, on),
			Setting::Suggest(on) => set(&mut self.suggest, on),
			Setting::Highlight(on) => set(&mut self.highlight, on),
			Setting::Theme(theme) => set(&mut self.theme, theme),
			Setting::TextSize(size) => set(&mut self.text_size, size),
			Setting::Typeface(typeface) => set(&mut self.typeface, typeface),
			Setting::Charset(charset) => set(&mut self.charset, Some(charset)),
		}
	}
}
