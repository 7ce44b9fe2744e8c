//! Document classification.
//!
//! Maps a file name and MIME type to the [`DocumentType`] whose grammar the
//! highlighter uses.

use std::sync::LazyLock;

use regex::Regex;

/// The MIME type that keeps an unrecognised document unhighlighted.
pub const TEXT_PLAIN: &str = "text/plain";

/// MIME type reported for files without an extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// The kind of document being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentType {
	#[default]
	PlainText,
	CLike,
	Html,
	Css,
	Markdown,
	OrgMode,
	Shell,
	GenericCode,
}

impl DocumentType {
	pub const ALL: [DocumentType; 8] = [
		Self::PlainText,
		Self::CLike,
		Self::Html,
		Self::Css,
		Self::Markdown,
		Self::OrgMode,
		Self::Shell,
		Self::GenericCode,
	];

	/// Returns a short lowercase name, as printed by the CLI.
	pub const fn name(self) -> &'static str {
		match self {
			Self::PlainText => "plain",
			Self::CLike => "c-like",
			Self::Html => "html",
			Self::Css => "css",
			Self::Markdown => "markdown",
			Self::OrgMode => "org",
			Self::Shell => "shell",
			Self::GenericCode => "generic",
		}
	}
}

impl std::fmt::Display for DocumentType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Extension patterns in match priority order. Each must match the whole
/// extension, dot included.
static EXTENSIONS: LazyLock<Vec<(Regex, DocumentType)>> = LazyLock::new(|| {
	[
		(r"^\.(c(c|pp|xx|\+\+)?|go|h|java|js|kt|m|py|swift)$", DocumentType::CLike),
		(r"^\.html?$", DocumentType::Html),
		(r"^\.css?$", DocumentType::Css),
		(r"^\.org$", DocumentType::OrgMode),
		(r"^\.md$", DocumentType::Markdown),
		(r"^\.sh$", DocumentType::Shell),
	]
	.into_iter()
	.filter_map(|(src, doc_type)| match Regex::new(src) {
		Ok(re) => Some((re, doc_type)),
		Err(e) => {
			tracing::error!(pattern = src, error = %e, "Invalid extension pattern");
			None
		}
	})
	.collect()
});

/// Returns the extension of a file name, from the last `.` inclusive.
fn extension(filename: &str) -> Option<&str> {
	filename.rfind('.').map(|dot| &filename[dot..])
}

/// Classifies a document from its file name and MIME type.
///
/// A recognised extension wins. Anything else is highlighted with the
/// generic grammar unless its MIME type is exactly `text/plain`; an absent
/// MIME type counts as not plain.
pub fn classify(filename: &str, mime: Option<&str>) -> DocumentType {
	if let Some(ext) = extension(filename)
		&& let Some((_, doc_type)) = EXTENSIONS.iter().find(|(re, _)| re.is_match(ext))
	{
		return *doc_type;
	}

	if mime == Some(TEXT_PLAIN) {
		DocumentType::PlainText
	} else {
		DocumentType::GenericCode
	}
}

/// Resolves the document type for the current highlight setting.
///
/// Highlighting off, or a document that has never been given a name, always
/// resolves to plain text.
pub fn resolve_document_type(highlight_enabled: bool, filename: Option<&str>, mime: Option<&str>) -> DocumentType {
	match filename {
		Some(name) if highlight_enabled => classify(name, mime),
		_ => DocumentType::PlainText,
	}
}

/// Guesses a MIME type from a file name's extension.
///
/// Returns [`OCTET_STREAM`] when the name has no extension and `None` when
/// the extension is unknown.
pub fn guess_mime(filename: &str) -> Option<&'static str> {
	let Some(ext) = extension(filename) else {
		return Some(OCTET_STREAM);
	};
	let mime = match ext[1..].to_ascii_lowercase().as_str() {
		"txt" | "text" | "log" | "conf" | "cfg" | "ini" | "asc" | "diff" | "patch" => TEXT_PLAIN,
		"htm" | "html" => "text/html",
		"css" => "text/css",
		"csv" => "text/csv",
		"md" => "text/markdown",
		"xml" => "text/xml",
		"js" => "text/javascript",
		"json" => "application/json",
		"sh" => "application/x-sh",
		"java" => "text/x-java",
		"c" | "h" => "text/x-c",
		"cc" | "cpp" | "cxx" | "c++" => "text/x-c++src",
		"py" => "text/x-python",
		"rs" => "text/rust",
		"toml" => "application/toml",
		"yaml" | "yml" => "application/yaml",
		"pdf" => "application/pdf",
		"zip" => "application/zip",
		"png" => "image/png",
		"jpg" | "jpeg" => "image/jpeg",
		"bin" => OCTET_STREAM,
		_ => return None,
	};
	Some(mime)
}
