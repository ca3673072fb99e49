use std::io::{self, BufRead};

/// Feed every line of `reader` to `visit`, terminator included.
///
/// The final line is passed as-is when the input does not end with a
/// newline, so concatenating the visited lines reproduces the input.
pub fn for_each_line<R, F>(reader: &mut R, mut visit: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&str) -> io::Result<()>,
{
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        visit(&buffer)?;
    }

    Ok(())
}
