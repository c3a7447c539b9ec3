use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// Standard alphabet, padding optional, non-canonical trailing bits accepted
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Turn a `base64Image` payload into the bytes handed to the backend
///
/// Accepts an optional `data:<mime>;base64,` prefix as produced by browsers.
/// A payload that does not decode, or decodes to nothing, is scored as its
/// raw bytes instead, so any present value reaches the backend.
pub fn decode_base64_image(payload: &str) -> Vec<u8> {
    let encoded = strip_data_url(payload.trim());

    match LENIENT.decode(encoded) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        Ok(_) => payload.as_bytes().to_vec(),
        Err(e) => {
            tracing::debug!("base64Image is not valid base64 ({}), using raw bytes", e);
            payload.as_bytes().to_vec()
        }
    }
}

fn strip_data_url(payload: &str) -> &str {
    match payload.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .unwrap_or(payload),
        None => payload,
    }
}
