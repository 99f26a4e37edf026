pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Supported formats: JPEG, PNG only. Convert HEIC photos to JPEG first.";
