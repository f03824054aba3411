//! Flat table mapping vt100-style input byte sequences to key names.
//!
//! Sequences are matched longest-first by the decoder's trie; values
//! with more than one name expand to that many tokens, and empty values
//! swallow the sequence entirely.

/// Sent twice for a single escape key press on some Windows consoles.
/// Excluded from the decoder trie; adjacent `escape` tokens are
/// collapsed in a post-pass instead.
pub const DOUBLE_ESCAPE: &str = "\x1b\x1b";

pub const KEY_MAP: &[(&str, &[&str])] = &[
    // Control keys.
    (" ", &[" "]),
    ("\r", &["enter"]),
    ("\x00", &["ctrl+@"]), // also ctrl+space
    ("\x01", &["ctrl+a"]),
    ("\x02", &["ctrl+b"]),
    ("\x03", &["ctrl+c"]),
    ("\x04", &["ctrl+d"]),
    ("\x05", &["ctrl+e"]),
    ("\x06", &["ctrl+f"]),
    ("\x07", &["ctrl+g"]),
    ("\x08", &["backspace"]), // '\b'
    ("\x09", &["tab"]),       // '\t'
    ("\x0a", &["ctrl+j"]),    // '\n'
    ("\x0b", &["ctrl+k"]),
    ("\x0c", &["ctrl+l"]),
    // 0x0d is '\r', mapped to enter above.
    ("\x0e", &["ctrl+n"]),
    ("\x0f", &["ctrl+o"]),
    ("\x10", &["ctrl+p"]),
    ("\x11", &["ctrl+q"]),
    ("\x12", &["ctrl+r"]),
    ("\x13", &["ctrl+s"]),
    ("\x14", &["ctrl+t"]),
    ("\x15", &["ctrl+u"]),
    ("\x16", &["ctrl+v"]),
    ("\x17", &["ctrl+w"]),
    ("\x18", &["ctrl+x"]),
    ("\x19", &["ctrl+y"]),
    ("\x1a", &["ctrl+z"]),
    ("\x1b", &["escape"]), // also ctrl+[
    (DOUBLE_ESCAPE, &["escape"]),
    ("\u{9b}", &["shift+escape"]),
    ("\x1c", &["ctrl+backslash"]),
    ("\x1d", &["ctrl+right_square_bracket"]),
    ("\x1e", &["ctrl+circumflex_accent"]),
    ("\x1f", &["ctrl+underscore"]), // also ctrl+hyphen
    // ASCII delete. Most terminals send it for the backspace key, so it
    // maps to backspace rather than delete.
    ("\x7f", &["backspace"]),
    ("\x1b\x7f", &["ctrl+w"]),
    // Various
    ("\x1b[1~", &["home"]), // tmux
    ("\x1b[2~", &["insert"]),
    ("\x1b[3~", &["delete"]),
    ("\x1b[4~", &["end"]), // tmux
    ("\x1b[5~", &["pageup"]),
    ("\x1b[6~", &["pagedown"]),
    ("\x1b[7~", &["home"]), // xrvt
    ("\x1b[8~", &["end"]),  // xrvt
    ("\x1b[Z", &["shift+tab"]),
    ("\x1b\x09", &["shift+tab"]), // Linux console
    ("\x1b[~", &["shift+tab"]),   // Windows console
    // Function keys.
    ("\x1bOP", &["f1"]),
    ("\x1bOQ", &["f2"]),
    ("\x1bOR", &["f3"]),
    ("\x1bOS", &["f4"]),
    ("\x1b[[A", &["f1"]), // Linux console
    ("\x1b[[B", &["f2"]), // Linux console
    ("\x1b[[C", &["f3"]), // Linux console
    ("\x1b[[D", &["f4"]), // Linux console
    ("\x1b[[E", &["f5"]), // Linux console
    ("\x1b[11~", &["f1"]), // rxvt-unicode
    ("\x1b[12~", &["f2"]), // rxvt-unicode
    ("\x1b[13~", &["f3"]), // rxvt-unicode
    ("\x1b[14~", &["f4"]), // rxvt-unicode
    ("\x1b[15~", &["f5"]),
    ("\x1b[17~", &["f6"]),
    ("\x1b[18~", &["f7"]),
    ("\x1b[19~", &["f8"]),
    ("\x1b[20~", &["f9"]),
    ("\x1b[21~", &["f10"]),
    ("\x1b[23~", &["f11"]),
    ("\x1b[24~", &["f12"]),
    ("\x1b[25~", &["f13"]),
    ("\x1b[26~", &["f14"]),
    ("\x1b[28~", &["f15"]),
    ("\x1b[29~", &["f16"]),
    ("\x1b[31~", &["f17"]),
    ("\x1b[32~", &["f18"]),
    ("\x1b[33~", &["f19"]),
    ("\x1b[34~", &["f20"]),
    // Xterm
    ("\x1b[1;2P", &["f13"]),
    ("\x1b[1;2Q", &["f14"]),
    ("\x1b[1;2R", &["f15"]), // conflicts with CPR responses
    ("\x1b[1;2S", &["f16"]),
    ("\x1b[15;2~", &["f17"]),
    ("\x1b[17;2~", &["f18"]),
    ("\x1b[18;2~", &["f19"]),
    ("\x1b[19;2~", &["f20"]),
    ("\x1b[20;2~", &["f21"]),
    ("\x1b[21;2~", &["f22"]),
    ("\x1b[23;2~", &["f23"]),
    ("\x1b[24;2~", &["f24"]),
    ("\x1b[23$", &["f23"]), // rxvt
    ("\x1b[24$", &["f24"]), // rxvt
    // CSI 27 disambiguated modified keys (xterm); remapped to the
    // unmodified versions.
    ("\x1b[27;2;13~", &["ctrl+m"]), // shift+enter
    ("\x1b[27;5;13~", &["ctrl+m"]), // ctrl+enter
    ("\x1b[27;6;13~", &["ctrl+m"]), // ctrl+shift+enter
    // Control + function keys.
    ("\x1b[1;5P", &["ctrl+f1"]),
    ("\x1b[1;5Q", &["ctrl+f2"]),
    ("\x1b[1;5R", &["ctrl+f3"]), // conflicts with CPR responses
    ("\x1b[1;5S", &["ctrl+f4"]),
    ("\x1b[15;5~", &["ctrl+f5"]),
    ("\x1b[17;5~", &["ctrl+f6"]),
    ("\x1b[18;5~", &["ctrl+f7"]),
    ("\x1b[19;5~", &["ctrl+f8"]),
    ("\x1b[20;5~", &["ctrl+f9"]),
    ("\x1b[21;5~", &["ctrl+f10"]),
    ("\x1b[23;5~", &["ctrl+f11"]),
    ("\x1b[24;5~", &["ctrl+f12"]),
    ("\x1b[1;6P", &["ctrl+f13"]),
    ("\x1b[1;6Q", &["ctrl+f14"]),
    ("\x1b[1;6R", &["ctrl+f15"]), // conflicts with CPR responses
    ("\x1b[1;6S", &["ctrl+f16"]),
    ("\x1b[15;6~", &["ctrl+f17"]),
    ("\x1b[17;6~", &["ctrl+f18"]),
    ("\x1b[18;6~", &["ctrl+f19"]),
    ("\x1b[19;6~", &["ctrl+f20"]),
    ("\x1b[20;6~", &["ctrl+f21"]),
    ("\x1b[21;6~", &["ctrl+f22"]),
    ("\x1b[23;6~", &["ctrl+f23"]),
    ("\x1b[24;6~", &["ctrl+f24"]),
    // rxvt-unicode control function keys.
    ("\x1b[11^", &["ctrl+f1"]),
    ("\x1b[12^", &["ctrl+f2"]),
    ("\x1b[13^", &["ctrl+f3"]),
    ("\x1b[14^", &["ctrl+f4"]),
    ("\x1b[15^", &["ctrl+f5"]),
    ("\x1b[17^", &["ctrl+f6"]),
    ("\x1b[18^", &["ctrl+f7"]),
    ("\x1b[19^", &["ctrl+f8"]),
    ("\x1b[20^", &["ctrl+f9"]),
    ("\x1b[21^", &["ctrl+f10"]),
    ("\x1b[23^", &["ctrl+f11"]),
    ("\x1b[24^", &["ctrl+f12"]),
    // rxvt-unicode control+shift function keys.
    ("\x1b[25^", &["ctrl+f13"]),
    ("\x1b[26^", &["ctrl+f14"]),
    ("\x1b[28^", &["ctrl+f15"]),
    ("\x1b[29^", &["ctrl+f16"]),
    ("\x1b[31^", &["ctrl+f17"]),
    ("\x1b[32^", &["ctrl+f18"]),
    ("\x1b[33^", &["ctrl+f19"]),
    ("\x1b[34^", &["ctrl+f20"]),
    ("\x1b[23@", &["ctrl+f21"]),
    ("\x1b[24@", &["ctrl+f22"]),
    // Tmux (Win32 subsystem) scroll events.
    ("\x1b[62~", &["<scroll-up>"]),
    ("\x1b[63~", &["<scroll-down>"]),
    // Meta/control/escape + pageup/pagedown/insert/delete.
    ("\x1b[3;2~", &["shift+delete"]), // xterm, gnome-terminal
    ("\x1b[3$", &["shift+delete"]),   // rxvt
    ("\x1b[5;2~", &["shift+pageup"]),
    ("\x1b[6;2~", &["shift+pagedown"]),
    ("\x1b[2;3~", &["escape", "insert"]),
    ("\x1b[3;3~", &["escape", "delete"]),
    ("\x1b[5;3~", &["escape", "pageup"]),
    ("\x1b[6;3~", &["escape", "pagedown"]),
    ("\x1b[2;4~", &["escape", "shift+insert"]),
    ("\x1b[3;4~", &["escape", "shift+delete"]),
    ("\x1b[5;4~", &["escape", "shift+pageup"]),
    ("\x1b[6;4~", &["escape", "shift+pagedown"]),
    ("\x1b[3;5~", &["ctrl+delete"]), // xterm, gnome-terminal
    ("\x1b[3^", &["ctrl+delete"]),   // rxvt
    ("\x1b[5;5~", &["ctrl+pageup"]),
    ("\x1b[6;5~", &["ctrl+pagedown"]),
    ("\x1b[5^", &["ctrl+pageup"]),   // rxvt
    ("\x1b[6^", &["ctrl+pagedown"]), // rxvt
    ("\x1b[3;6~", &["ctrl+shift+delete"]),
    ("\x1b[5;6~", &["ctrl+shift+pageup"]),
    ("\x1b[6;6~", &["ctrl+shift+pagedown"]),
    ("\x1b[2;7~", &["escape", "ctrl+insert"]),
    ("\x1b[5;7~", &["escape", "ctrl+pagedown"]),
    ("\x1b[6;7~", &["escape", "ctrl+pagedown"]),
    ("\x1b[2;8~", &["escape", "ctrl+shift+insert"]),
    ("\x1b[5;8~", &["escape", "ctrl+shift+pagedown"]),
    ("\x1b[6;8~", &["escape", "ctrl+shift+pagedown"]),
    // Arrows (normal cursor mode).
    ("\x1b[A", &["up"]),
    ("\x1b[B", &["down"]),
    ("\x1b[C", &["right"]),
    ("\x1b[D", &["left"]),
    ("\x1b[H", &["home"]),
    ("\x1b[F", &["end"]),
    // Application cursor mode. Tmux sends these for control+arrow, but
    // Emacs ansi-term sends them for plain arrows; plain arrows win.
    ("\x1bOA", &["up"]),
    ("\x1bOB", &["down"]),
    ("\x1bOC", &["right"]),
    ("\x1bOD", &["left"]),
    ("\x1bOF", &["end"]),
    ("\x1bOH", &["home"]),
    // Shift + arrows.
    ("\x1b[1;2A", &["shift+up"]),
    ("\x1b[1;2B", &["shift+down"]),
    ("\x1b[1;2C", &["shift+right"]),
    ("\x1b[1;2D", &["shift+left"]),
    ("\x1b[1;2F", &["shift+end"]),
    ("\x1b[1;2H", &["shift+home"]),
    // Shift+navigation in rxvt.
    ("\x1b[a", &["shift+up"]),
    ("\x1b[b", &["shift+down"]),
    ("\x1b[c", &["shift+right"]),
    ("\x1b[d", &["shift+left"]),
    ("\x1b[7$", &["shift+home"]),
    ("\x1b[8$", &["shift+end"]),
    // Meta + arrows, xterm and gnome-terminal style. Plain-ESC-prefix
    // variants are deliberately absent: a bare escape followed by a
    // letter must stay two separate tokens.
    ("\x1b[1;3A", &["escape", "up"]),
    ("\x1b[1;3B", &["escape", "down"]),
    ("\x1b[1;3C", &["escape", "right"]),
    ("\x1b[1;3D", &["escape", "left"]),
    ("\x1b[1;3F", &["escape", "end"]),
    ("\x1b[1;3H", &["escape", "home"]),
    // Alt + shift + arrows.
    ("\x1b[1;4A", &["escape", "shift+up"]),
    ("\x1b[1;4B", &["escape", "shift+down"]),
    ("\x1b[1;4C", &["escape", "shift+right"]),
    ("\x1b[1;4D", &["escape", "shift+left"]),
    ("\x1b[1;4F", &["escape", "shift+end"]),
    ("\x1b[1;4H", &["escape", "shift+home"]),
    // Control + arrows.
    ("\x1b[1;5A", &["ctrl+up"]),
    ("\x1b[1;5B", &["ctrl+down"]),
    ("\x1b[1;5C", &["ctrl+right"]),
    ("\x1b[1;5D", &["ctrl+left"]),
    ("\x1bf", &["ctrl+right"]), // iTerm natural editing keys
    ("\x1bb", &["ctrl+left"]),  // iTerm natural editing keys
    ("\x1b[1;5F", &["ctrl+end"]),
    ("\x1b[1;5H", &["ctrl+home"]),
    // rxvt
    ("\x1b[7^", &["ctrl+end"]),
    ("\x1b[8^", &["ctrl+home"]),
    // Tmux control+arrow.
    ("\x1b[5A", &["ctrl+up"]),
    ("\x1b[5B", &["ctrl+down"]),
    ("\x1b[5C", &["ctrl+right"]),
    ("\x1b[5D", &["ctrl+left"]),
    // Control arrow keys in rxvt.
    ("\x1bOa", &["ctrl+up"]),
    ("\x1bOb", &["ctrl+up"]),
    ("\x1bOc", &["ctrl+right"]),
    ("\x1bOd", &["ctrl+left"]),
    // Control + shift + arrows.
    ("\x1b[1;6A", &["ctrl+shift+up"]),
    ("\x1b[1;6B", &["ctrl+shift+down"]),
    ("\x1b[1;6C", &["ctrl+shift+right"]),
    ("\x1b[1;6D", &["ctrl+shift+left"]),
    ("\x1b[1;6F", &["ctrl+shift+end"]),
    ("\x1b[1;6H", &["ctrl+shift+home"]),
    // Control + meta + arrows.
    ("\x1b[1;7A", &["escape", "ctrl+up"]),
    ("\x1b[1;7B", &["escape", "ctrl+down"]),
    ("\x1b[1;7C", &["escape", "ctrl+right"]),
    ("\x1b[1;7D", &["escape", "ctrl+left"]),
    ("\x1b[1;7F", &["escape", "ctrl+end"]),
    ("\x1b[1;7H", &["escape", "ctrl+home"]),
    // Meta + shift + arrows.
    ("\x1b[1;8A", &["escape", "ctrl+shift+up"]),
    ("\x1b[1;8B", &["escape", "ctrl+shift+down"]),
    ("\x1b[1;8C", &["escape", "ctrl+shift+right"]),
    ("\x1b[1;8D", &["escape", "ctrl+shift+left"]),
    ("\x1b[1;8F", &["escape", "ctrl+shift+end"]),
    ("\x1b[1;8H", &["escape", "ctrl+shift+home"]),
    // Meta + arrow on (some) Macs under iTerm defaults.
    ("\x1b[1;9A", &["escape", "up"]),
    ("\x1b[1;9B", &["escape", "down"]),
    ("\x1b[1;9C", &["escape", "right"]),
    ("\x1b[1;9D", &["escape", "left"]),
    // Control/shift/meta + number in mintty.
    ("\x1b[1;5p", &["ctrl+0"]),
    ("\x1b[1;5q", &["ctrl+1"]),
    ("\x1b[1;5r", &["ctrl+2"]),
    ("\x1b[1;5s", &["ctrl+3"]),
    ("\x1b[1;5t", &["ctrl+4"]),
    ("\x1b[1;5u", &["ctrl+5"]),
    ("\x1b[1;5v", &["ctrl+6"]),
    ("\x1b[1;5w", &["ctrl+7"]),
    ("\x1b[1;5x", &["ctrl+8"]),
    ("\x1b[1;5y", &["ctrl+9"]),
    ("\x1b[1;6p", &["ctrl+shift+0"]),
    ("\x1b[1;6q", &["ctrl+shift+1"]),
    ("\x1b[1;6r", &["ctrl+shift+2"]),
    ("\x1b[1;6s", &["ctrl+shift+3"]),
    ("\x1b[1;6t", &["ctrl+shift+4"]),
    ("\x1b[1;6u", &["ctrl+shift+5"]),
    ("\x1b[1;6v", &["ctrl+shift+6"]),
    ("\x1b[1;6w", &["ctrl+shift+7"]),
    ("\x1b[1;6x", &["ctrl+shift+8"]),
    ("\x1b[1;6y", &["ctrl+shift+9"]),
    ("\x1b[1;7p", &["escape", "ctrl+0"]),
    ("\x1b[1;7q", &["escape", "ctrl+1"]),
    ("\x1b[1;7r", &["escape", "ctrl+2"]),
    ("\x1b[1;7s", &["escape", "ctrl+3"]),
    ("\x1b[1;7t", &["escape", "ctrl+4"]),
    ("\x1b[1;7u", &["escape", "ctrl+5"]),
    ("\x1b[1;7v", &["escape", "ctrl+6"]),
    ("\x1b[1;7w", &["escape", "ctrl+7"]),
    ("\x1b[1;7x", &["escape", "ctrl+8"]),
    ("\x1b[1;7y", &["escape", "ctrl+9"]),
    ("\x1b[1;8p", &["escape", "ctrl+shift+0"]),
    ("\x1b[1;8q", &["escape", "ctrl+shift+1"]),
    ("\x1b[1;8r", &["escape", "ctrl+shift+2"]),
    ("\x1b[1;8s", &["escape", "ctrl+shift+3"]),
    ("\x1b[1;8t", &["escape", "ctrl+shift+4"]),
    ("\x1b[1;8u", &["escape", "ctrl+shift+5"]),
    ("\x1b[1;8v", &["escape", "ctrl+shift+6"]),
    ("\x1b[1;8w", &["escape", "ctrl+shift+7"]),
    ("\x1b[1;8x", &["escape", "ctrl+shift+8"]),
    ("\x1b[1;8y", &["escape", "ctrl+shift+9"]),
    // rxvt keypad sequences.
    ("\x1bOj", &["*"]),
    ("\x1bOk", &["+"]),
    ("\x1bOm", &["-"]),
    ("\x1bOn", &["."]),
    ("\x1bOo", &["/"]),
    ("\x1bOp", &["0"]),
    ("\x1bOq", &["1"]),
    ("\x1bOr", &["2"]),
    ("\x1bOs", &["3"]),
    ("\x1bOt", &["4"]),
    ("\x1bOu", &["5"]),
    ("\x1bOv", &["6"]),
    ("\x1bOw", &["7"]),
    ("\x1bOx", &["8"]),
    ("\x1bOy", &["9"]),
    ("\x1bOM", &["enter"]),
    // WezTerm on macOS emits sequences for Opt + top-row keys; other
    // terminals send these characters directly.
    ("\x1b§", &["§"]),
    ("\x1b1", &["¡"]),
    ("\x1b2", &["™"]),
    ("\x1b3", &["£"]),
    ("\x1b4", &["¢"]),
    ("\x1b5", &["∞"]),
    ("\x1b6", &["§"]),
    ("\x1b7", &["¶"]),
    ("\x1b8", &["•"]),
    ("\x1b9", &["ª"]),
    ("\x1b0", &["º"]),
    ("\x1b-", &["–"]),
    ("\x1b=", &["≠"]),
    // Ctrl+§ on kitty differs from other macOS terminals.
    ("\x1b[167;5u", &["0"]),
    // Ignored sequences: recognized, mapped to nothing.
    // Keypad 5 when not in number mode.
    ("\x1b[E", &[]), // xterm
    ("\x1b[G", &[]), // Linux console
    // Various ctrl+cmd+ keys under kitty on macOS.
    ("\x1b[3;13~", &[]),  // ctrl-cmd-del
    ("\x1b[1;13H", &[]),  // ctrl-cmd-home
    ("\x1b[1;13F", &[]),  // ctrl-cmd-end
    ("\x1b[5;13~", &[]),  // ctrl-cmd-pgup
    ("\x1b[6;13~", &[]),  // ctrl-cmd-pgdn
    ("\x1b[49;13u", &[]), // ctrl-cmd-1
    ("\x1b[50;13u", &[]), // ctrl-cmd-2
    ("\x1b[51;13u", &[]), // ctrl-cmd-3
    ("\x1b[52;13u", &[]), // ctrl-cmd-4
    ("\x1b[53;13u", &[]), // ctrl-cmd-5
    ("\x1b[54;13u", &[]), // ctrl-cmd-6
    ("\x1b[55;13u", &[]), // ctrl-cmd-7
    ("\x1b[56;13u", &[]), // ctrl-cmd-8
    ("\x1b[57;13u", &[]), // ctrl-cmd-9
    ("\x1b[48;13u", &[]), // ctrl-cmd-0
    ("\x1b[45;13u", &[]), // ctrl-cmd--
    ("\x1b[61;13u", &[]), // ctrl-cmd-+
    ("\x1b[91;13u", &[]), // ctrl-cmd-[
    ("\x1b[93;13u", &[]), // ctrl-cmd-]
    ("\x1b[92;13u", &[]), // ctrl-cmd-backslash
    ("\x1b[39;13u", &[]), // ctrl-cmd-'
    ("\x1b[59;13u", &[]), // ctrl-cmd-;
    ("\x1b[47;13u", &[]), // ctrl-cmd-/
    ("\x1b[46;13u", &[]), // ctrl-cmd-.
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequences_are_unique() {
        let mut seen = HashSet::new();
        for (seq, _) in KEY_MAP {
            assert!(seen.insert(*seq), "duplicate sequence {seq:?}");
        }
    }

    #[test]
    fn no_sequence_is_empty() {
        for (seq, _) in KEY_MAP {
            assert!(!seq.is_empty());
        }
    }

    #[test]
    fn double_escape_maps_to_a_single_escape() {
        let (_, keys) = KEY_MAP
            .iter()
            .find(|(seq, _)| *seq == DOUBLE_ESCAPE)
            .expect("double escape missing");
        assert_eq!(*keys, ["escape"]);
    }

    #[test]
    fn ignored_sequences_map_to_nothing() {
        let ignored: Vec<_> = KEY_MAP.iter().filter(|(_, keys)| keys.is_empty()).collect();
        assert_eq!(ignored.len(), 26);
        assert!(ignored.iter().all(|(seq, _)| seq.starts_with("\x1b[")));
    }
}
