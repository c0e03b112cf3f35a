//! Input format sniffing for document uploads.

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// MIME type sent for PDF uploads.
pub const PDF_MIME: &str = "application/pdf";

/// MIME type sent for anything else; the service decides whether it accepts it.
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// Check if bytes start with the PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Pick the upload MIME type for document bytes.
pub fn sniff_mime(data: &[u8]) -> &'static str {
    if is_pdf_bytes(data) {
        PDF_MIME
    } else {
        OCTET_STREAM_MIME
    }
}
