//! Built-in option table.

use super::validators;
use super::{OptionDef, OptionDefault, OptionFlags, OptionScope};

/// Returns the builtin option definitions in registration order.
pub fn defs() -> Vec<OptionDef> {
	use OptionScope::{Buffer, Global, Window};

	vec![
		// Global options.
		OptionDef::new("background", Global, OptionDefault::String(|| "dark".into()))
			.short("bg")
			.describe("Color scheme brightness hint")
			.flags(OptionFlags::REDRAW)
			.validator(validators::background),
		OptionDef::new("cmdheight", Global, OptionDefault::Int(|| 1))
			.short("ch")
			.describe("Number of screen lines for the command line")
			.flags(OptionFlags::REDRAW)
			.validator(validators::non_negative_int),
		OptionDef::new("columns", Global, OptionDefault::Int(|| 80))
			.short("co")
			.describe("Number of columns of the screen")
			.flags(OptionFlags::REDRAW)
			.validator(validators::positive_int),
		OptionDef::new("compatible", Global, OptionDefault::Bool(|| false))
			.short("cp")
			.flags(OptionFlags::HIDDEN),
		OptionDef::new("laststatus", Global, OptionDefault::Int(|| 2))
			.short("ls")
			.describe("When the last window has a status line")
			.flags(OptionFlags::REDRAW)
			.validator(validators::laststatus),
		OptionDef::new("lines", Global, OptionDefault::Int(|| 24))
			.describe("Number of lines of the screen")
			.flags(OptionFlags::REDRAW)
			.validator(validators::positive_int),
		OptionDef::new("shortmess", Global, OptionDefault::String(|| "filnxtToOF".into()))
			.short("shm")
			.describe("Flags that shorten messages")
			.flags(OptionFlags::FLAG_LIST | OptionFlags::NO_DUPLICATES)
			.validator(validators::unique_flags),
		// Window-local options.
		OptionDef::new("list", Window, OptionDefault::Bool(|| false))
			.describe("Show tabs and trailing whitespace")
			.flags(OptionFlags::REDRAW),
		OptionDef::new("number", Window, OptionDefault::Bool(|| false))
			.short("nu")
			.describe("Print the line number in front of each line")
			.flags(OptionFlags::REDRAW),
		OptionDef::new("relativenumber", Window, OptionDefault::Bool(|| false))
			.short("rnu")
			.describe("Show line numbers relative to the cursor")
			.flags(OptionFlags::REDRAW),
		OptionDef::new("wrap", Window, OptionDefault::Bool(|| true))
			.describe("Wrap long lines")
			.flags(OptionFlags::REDRAW),
		OptionDef::new("listchars", Window, OptionDefault::String(|| "tab:> ,trail:-,nbsp:+".into()))
			.short("lcs")
			.describe("Characters for displaying in list mode")
			.global_local()
			.flags(OptionFlags::COMMA_LIST | OptionFlags::NO_DUPLICATES),
		OptionDef::new("scrolloff", Window, OptionDefault::Int(|| 0))
			.short("so")
			.describe("Minimum number of lines above and below the cursor")
			.global_local()
			.validator(validators::non_negative_int),
		OptionDef::new("statusline", Window, OptionDefault::String(String::new))
			.short("stl")
			.describe("Custom format for the status line")
			.global_local(),
		// Buffer-local options.
		OptionDef::new("bufhidden", Buffer, OptionDefault::String(String::new))
			.short("bh")
			.describe("What happens when the buffer is no longer displayed")
			.validator(validators::bufhidden),
		OptionDef::new("buftype", Buffer, OptionDefault::String(String::new))
			.short("bt")
			.describe("Special type of buffer")
			.validator(validators::buftype),
		OptionDef::new("expandtab", Buffer, OptionDefault::Bool(|| false))
			.short("et")
			.describe("Use spaces when inserting a tab"),
		OptionDef::new("filetype", Buffer, OptionDefault::String(String::new))
			.short("ft")
			.describe("Type of file, used for filetype defaults"),
		OptionDef::new("modeline", Buffer, OptionDefault::Bool(|| true))
			.short("ml")
			.describe("Recognize modelines when reading the buffer"),
		OptionDef::new("shiftwidth", Buffer, OptionDefault::Int(|| 8))
			.short("sw")
			.describe("Number of spaces to use for each step of indent")
			.validator(validators::non_negative_int),
		OptionDef::new("swapfile", Buffer, OptionDefault::Bool(|| true))
			.short("swf")
			.describe("Use a swapfile for the buffer"),
		OptionDef::new("tabstop", Buffer, OptionDefault::Int(|| 8))
			.short("ts")
			.describe("Number of spaces that a tab counts for")
			.validator(validators::positive_int),
		OptionDef::new("undofile", Buffer, OptionDefault::Bool(|| false))
			.short("udf")
			.describe("Persist undo history to a file"),
		OptionDef::new("makeprg", Buffer, OptionDefault::String(|| "make".into()))
			.short("mp")
			.describe("Program to use for the make command")
			.global_local(),
		OptionDef::new("undolevels", Buffer, OptionDefault::Int(|| 1000))
			.short("ul")
			.describe("Maximum number of changes that can be undone")
			.global_local(),
	]
}
