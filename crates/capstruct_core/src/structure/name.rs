use crate::structure::{Result, StructureError};

/// Whether `byte` may appear in a bare (unquoted) name or token.
pub fn is_name_char(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'+' | b'/' | b':' | b'.')
}

/// Check a structure or field name: an ASCII letter followed by name characters.
pub fn validate_name(name: &str) -> Result<()> {
	let bytes = name.as_bytes();
	let bad = match bytes.first() {
		None => Some(0),
		Some(first) if !first.is_ascii_alphabetic() => Some(0),
		Some(_) => bytes.iter().skip(1).position(|byte| !is_name_char(*byte)).map(|idx| idx + 1),
	};

	match bad {
		None => Ok(()),
		Some(offset) => {
			tracing::warn!(name, offset, "invalid character in name");
			Err(StructureError::InvalidName {
				name: name.to_owned(),
				offset,
			})
		}
	}
}

#[cfg(test)]
mod tests;
