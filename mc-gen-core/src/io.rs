use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens a text file for buffered, line-by-line reading.
pub(crate) fn open_buffered<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Reads the next line without its terminator.
///
/// - Ends a line on `\n`, `\r\n` or a bare `\r`
/// - Malformed UTF-8 is replaced with U+FFFD instead of failing
/// - Returns `Ok(None)` at end of input
pub(crate) fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
	let mut bytes = Vec::new();
	let mut read_any = false;

	loop {
		let available = match reader.fill_buf() {
			Ok(available) => available,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		};
		if available.is_empty() {
			break;
		}
		read_any = true;

		match available.iter().position(|&b| b == b'\n' || b == b'\r') {
			Some(i) => {
				let terminator = available[i];
				bytes.extend_from_slice(&available[..i]);
				reader.consume(i + 1);
				if terminator == b'\r' {
					skip_line_feed(reader)?;
				}
				return Ok(Some(String::from_utf8_lossy(&bytes).into_owned()));
			}
			None => {
				let len = available.len();
				bytes.extend_from_slice(available);
				reader.consume(len);
			}
		}
	}

	if !read_any {
		return Ok(None);
	}
	Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Consumes the `\n` of a `\r\n` pair, if present.
fn skip_line_feed<R: BufRead>(reader: &mut R) -> io::Result<()> {
	loop {
		match reader.fill_buf() {
			Ok(next) => {
				if next.first() == Some(&b'\n') {
					reader.consume(1);
				}
				return Ok(());
			}
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		}
	}
}
