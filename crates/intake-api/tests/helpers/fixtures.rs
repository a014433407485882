//! Test fixtures: minimal JPEG/PNG/PDF blobs.

/// Minimal JPEG: SOI + JFIF APP0 segment + EOI.
pub fn create_minimal_jpeg() -> Vec<u8> {
    let mut jpeg = vec![
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00,
    ];
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// JPEG padded with zero bytes to exactly `size` bytes (for size-limit tests).
pub fn create_jpeg_of_size(size: usize) -> Vec<u8> {
    let mut jpeg = create_minimal_jpeg();
    if size > jpeg.len() {
        jpeg.truncate(jpeg.len() - 2);
        jpeg.resize(size - 2, 0x00);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
    }
    jpeg
}

/// Minimal valid 1x1 PNG bytes.
pub fn create_minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// Minimal valid PDF.
pub fn create_test_pdf() -> Vec<u8> {
    b"%PDF-1.4
1 0 obj
<< /Type /Catalog /Pages 2 0 R >>
endobj
2 0 obj
<< /Type /Pages /Kids [3 0 R] /Count 1 >>
endobj
3 0 obj
<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>
endobj
xref
0 4
0000000000 65535 f
0000000009 00000 n
0000000058 00000 n
0000000115 00000 n
trailer
<< /Size 4 /Root 1 0 R >>
startxref
200
%%EOF"
        .to_vec()
}

/// Plain text bytes with no recognizable file signature.
pub fn plain_text_bytes() -> Vec<u8> {
    b"Just some plain text, not an image.".to_vec()
}
