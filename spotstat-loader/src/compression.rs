use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use spotstat_types::{Compression, SpotstatError};
use zip::ZipArchive;

/// Open `path` and wrap it in the decoder matching `compression`.
pub(crate) fn open(path: &Path, compression: Compression) -> Result<Box<dyn Read>, SpotstatError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|e| SpotstatError::io(&display, e.to_string()))?;
    match compression {
        Compression::None => Ok(Box::new(BufReader::new(file))),
        // Concatenated members form one stream.
        Compression::Gzip => Ok(Box::new(MultiGzDecoder::new(BufReader::new(file)))),
        Compression::Zip => {
            let bytes = read_single_zip_entry(file, &display)?;
            Ok(Box::new(Cursor::new(bytes)))
        }
        other => Err(SpotstatError::invalid_arg(format!(
            "unsupported compression: {other}"
        ))),
    }
}

fn read_single_zip_entry(file: File, display: &str) -> Result<Vec<u8>, SpotstatError> {
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| SpotstatError::io(display, e.to_string()))?;
    match archive.len() {
        0 => {
            return Err(SpotstatError::Data(format!(
                "zip archive {display} has no entries"
            )));
        }
        1 => {}
        n => {
            return Err(SpotstatError::Data(format!(
                "zip archive {display} holds {n} files; expected exactly one"
            )));
        }
    }
    let mut entry = archive
        .by_index(0)
        .map_err(|e| SpotstatError::io(display, e.to_string()))?;
    let mut bytes = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| SpotstatError::io(display, e.to_string()))?;
    Ok(bytes)
}
