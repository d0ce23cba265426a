// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub mod constants {
    pub const TAG_OPEN: &str = "[";
    pub const TAG_CLOSE: &str = "]";
    pub const CLOSE_TAG_OPEN: &str = "[/";
    pub const ESCAPED_TAG_OPEN: &str = "[[";
    pub const ESCAPED_TAG_CLOSE: &str = "]]";
    pub const NEW_LINE: &str = "\n";
    pub const NEW_LINE_CRLF: &str = "\r\n";
    pub const CARRIAGE_RETURN: &str = "\r";
    /// Characters that end a run of literal text.
    pub const TEXT_STOP_CHARS: &str = "[]\r\n";
    /// Characters that may not appear inside a tag body.
    pub const TAG_BODY_STOP_CHARS: &str = "[]\n";

    pub const BACKGROUND_PREFIX: &str = "on";
    pub const LINK_PREFIX: &str = "link=";
    pub const DEFAULT_COLOR: &str = "default";
}
