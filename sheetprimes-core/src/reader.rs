//! Workbook opening built on calamine, with encrypted-container detection

use std::fs::File;
use std::path::Path;

use anyhow::anyhow;
use calamine::{Data, Range, Reader, Sheets, XlsError, XlsxError, open_workbook_auto};

use crate::error::ScanError;

/// Open the workbook at `path` and return the cell range of its first sheet.
///
/// The workbook handle lives only for the duration of this call and is
/// dropped on every path, success or failure, before the range is returned.
pub fn first_sheet_range(path: &Path) -> Result<Range<Data>, ScanError> {
    let mut workbook: Sheets<_> = match open_workbook_auto(path) {
        Ok(workbook) => workbook,
        Err(err) => return Err(classify_open_error(path, err)),
    };

    match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => Ok(range),
        Some(Err(err)) => Err(ScanError::Unexpected(
            anyhow!(err).context("failed to extract the first worksheet"),
        )),
        None => Err(ScanError::Unexpected(anyhow!("workbook has no sheets"))),
    }
}

fn classify_open_error(path: &Path, err: calamine::Error) -> ScanError {
    match err {
        calamine::Error::Xls(XlsError::Password) | calamine::Error::Xlsx(XlsxError::Password) => {
            ScanError::Encrypted
        }
        err => {
            if is_encrypted_container(path) {
                ScanError::Encrypted
            } else {
                ScanError::Read(err)
            }
        }
    }
}

/// Encrypted OOXML wraps the real ZIP package in an OLE/CFB compound file
/// carrying `EncryptionInfo` and `EncryptedPackage` streams, which calamine
/// rejects as an unreadable archive.
fn is_encrypted_container(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    match cfb::CompoundFile::open(file) {
        Ok(ole) => ole.exists("EncryptionInfo") || ole.exists("EncryptedPackage"),
        Err(_) => false,
    }
}
