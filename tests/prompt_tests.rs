use promptkit::{Glyphs, Key, Prompt, PromptError, PromptState, Screen, ScriptedKeys, Theme};

/// Runs `prompt` against `keys` with colors off and returns the outcome plus everything written.
fn run<S: PromptState>(prompt: Prompt<S>, keys: Vec<Key>) -> (Result<S, PromptError>, String) {
    run_with_theme(prompt, keys, Theme::new(false))
}

fn run_with_theme<S: PromptState>(
    prompt: Prompt<S>,
    keys: Vec<Key>,
    theme: Theme,
) -> (Result<S, PromptError>, String) {
    let mut out = Vec::new();
    let result = {
        let mut screen = Screen::new(&mut out);
        let mut source = ScriptedKeys::new(keys);
        prompt.with_theme(theme).open(&mut source, &mut screen)
    };
    (result, String::from_utf8(out).unwrap())
}

fn typed(text: &str) -> Vec<Key> {
    Key::typed(text).collect()
}

fn items() -> Vec<String> {
    (1..=4).map(|i| format!("Item {i}")).collect()
}

#[test]
fn test_text_default_is_returned_on_empty_submit() {
    let prompt = Prompt::text("Enter your Email").with_default("example@mail.com");
    let (result, out) = run(prompt, vec![Key::Enter]);

    assert_eq!(result.unwrap().resolve(), "example@mail.com");
    assert!(out.starts_with("? Enter your Email: "));
    assert!(out.ends_with("✔ Enter your Email: example@mail.com\r\n"));
}

#[test]
fn test_text_typed_value_wins_over_default() {
    let mut keys = typed("me@x.io");
    keys.push(Key::Enter);
    let (result, out) = run(Prompt::text("Email").with_default("example@mail.com"), keys);

    assert_eq!(result.unwrap().resolve(), "me@x.io");
    assert!(out.ends_with("✔ Email: me@x.io\r\n"));
}

#[test]
fn test_text_editing_in_the_middle() {
    let mut keys = typed("helo");
    keys.extend([Key::Left, Key::char('l'), Key::Enter]);
    let (result, _) = run(Prompt::text("Word"), keys);

    assert_eq!(result.unwrap().resolve(), "hello");
}

#[test]
fn test_text_initial_value_can_be_extended() {
    let mut keys = typed("ing");
    keys.push(Key::Enter);
    let (result, _) = run(Prompt::text("Word").with_initial_value("test"), keys);

    assert_eq!(result.unwrap().resolve(), "testing");
}

#[test]
fn test_text_leading_space_is_ignored() {
    let keys = vec![Key::Space, Key::char('a'), Key::Space, Key::char('b'), Key::Enter];
    let (result, _) = run(Prompt::text("Name"), keys);

    assert_eq!(result.unwrap().resolve(), "a b");
}

#[test]
fn test_sensitive_text_never_reaches_the_screen() {
    let mut keys = typed("hunter2");
    keys.push(Key::Enter);
    let (result, out) = run(Prompt::text("Enter your Password").sensitive(true), keys);

    assert_eq!(result.unwrap().resolve(), "hunter2");
    assert!(!out.contains("hunter2"));
    assert!(out.ends_with("✔ Enter your Password: *******\r\n"));
}

#[test]
fn test_paste_newlines_become_spaces() {
    let keys = vec![Key::paste("one\ntwo\r\nthree"), Key::Enter];
    let (result, _) = run(Prompt::text("Lines"), keys);

    assert_eq!(result.unwrap().resolve(), "one two three");
}

#[test]
fn test_confirm_accepts_yes_over_default_no() {
    let keys = vec![Key::char('y'), Key::Enter];
    let (result, out) = run(Prompt::confirm("Are you sure?", Some(false)), keys);

    assert!(result.unwrap().resolve());
    assert!(out.starts_with("? Are you sure?: [y/N] "));
    assert!(out.ends_with("✔ Are you sure?: yes\r\n"));
}

#[test]
fn test_confirm_empty_answer_uses_default() {
    let (result, out) = run(Prompt::confirm("Proceed", Some(true)), vec![Key::Enter]);

    assert!(result.unwrap().resolve());
    assert!(out.contains("[Y/n] "));
}

#[test]
fn test_confirm_invalid_answer_keeps_prompt_open() {
    let mut keys = typed("maybe");
    keys.push(Key::Enter);
    keys.extend(std::iter::repeat_n(Key::Backspace, 5));
    keys.extend([Key::char('n'), Key::Enter]);

    let (result, out) = run(Prompt::confirm("Delete", None), keys);

    assert!(!result.unwrap().resolve());
    assert!(out.contains("[y/n] "));
    assert!(out.ends_with("✔ Delete: no\r\n"));
    assert!(!out.contains("invalid value"));
}

#[test]
fn test_confirm_without_default_requires_an_answer() {
    // the second Enter never submits, so the scripted source runs dry
    let (result, _) = run(Prompt::confirm("Delete", None), vec![Key::Enter, Key::Enter]);

    assert!(matches!(result, Err(PromptError::Io(_))));
}

#[test]
fn test_confirm_custom_vocabulary() {
    let keys = vec![Key::char('J'), Key::char('a'), Key::Enter];
    let prompt = Prompt::confirm("Weiter", None).with_vocabulary(["ja"], ["nein"]);
    let (result, _) = run(prompt, keys);

    assert!(result.unwrap().resolve());
}

#[test]
fn test_select_right_jumps_to_last() {
    let (result, out) = run(
        Prompt::select("Select an Option", items(), String::clone),
        vec![Key::Right, Key::Enter],
    );

    assert_eq!(result.unwrap().resolve().as_deref(), Some("Item 4"));
    assert!(out.starts_with("? Select an Option: › - Use arrow-keys. Return to submit.\r\n"));
    assert!(out.ends_with("✔ Select an Option: Item 4\r\n"));
}

#[test]
fn test_select_navigation_wraps() {
    let keys = vec![Key::Up, Key::Up, Key::Down, Key::Enter];
    let (result, _) = run(Prompt::select("Pick", items(), String::clone), keys);

    assert_eq!(result.unwrap().resolve().as_deref(), Some("Item 4"));
}

#[test]
fn test_select_left_jumps_to_first() {
    let prompt = Prompt::select("Pick", items(), String::clone).with_starting_cursor(2);
    let (result, _) = run(prompt, vec![Key::Left, Key::Enter]);

    assert_eq!(result.unwrap().resolve().as_deref(), Some("Item 1"));
}

#[test]
fn test_select_starting_cursor() {
    let prompt = Prompt::select("Pick", items(), String::clone).with_starting_cursor(2);
    let (result, _) = run(prompt, vec![Key::Up, Key::Enter]);

    assert_eq!(result.unwrap().resolve().as_deref(), Some("Item 2"));
}

#[test]
fn test_select_rerender_climbs_to_first_entry() {
    let (_, out) = run(
        Prompt::select("Pick", items(), String::clone),
        vec![Key::Down, Key::Enter],
    );

    assert!(out.contains("\x1b[3A"));
    assert!(out.contains("❯   Item 2"));
}

#[test]
fn test_select_empty_list_resolves_to_none() {
    let prompt = Prompt::select("Pick", Vec::<String>::new(), String::clone);
    let (result, out) = run(prompt, vec![Key::Down, Key::Enter]);

    assert!(result.unwrap().resolve().is_none());
    assert!(out.ends_with("✔ Pick: none\r\n"));
}

#[test]
fn test_checkbox_toggles_one_entry() {
    let (result, out) = run(
        Prompt::checkbox("Select one or more options", items(), String::clone),
        vec![Key::Down, Key::Space, Key::Enter],
    );

    assert_eq!(result.unwrap().resolve(), vec!["Item 2"]);
    assert!(out.ends_with("✔ Select one or more options: Item 2\r\n"));
}

#[test]
fn test_checkbox_all_then_none() {
    let prompt = Prompt::checkbox("Options", items(), String::clone);
    let (result, _) = run(prompt, vec![Key::Right, Key::Space, Key::Enter]);
    assert_eq!(result.unwrap().resolve(), vec!["Item 2", "Item 3", "Item 4"]);

    let prompt = Prompt::checkbox("Options", items(), String::clone);
    let (result, out) = run(prompt, vec![Key::Right, Key::Left, Key::Enter]);
    assert!(result.unwrap().resolve().is_empty());
    assert!(out.ends_with("✔ Options: none\r\n"));
}

#[test]
fn test_checkbox_prechecked_entries() {
    let prompt = Prompt::checkbox("Options", items(), String::clone)
        .with_checked(|item| item == "Item 3");
    let (result, out) = run(prompt, vec![Key::Space, Key::Enter]);

    assert_eq!(result.unwrap().resolve(), vec!["Item 1", "Item 3"]);
    assert!(out.contains("[■] Item 3"));
    assert!(out.ends_with("✔ Options: Item 1, Item 3\r\n"));
}

#[test]
fn test_escape_cancels() {
    let mut keys = typed("abc");
    keys.push(Key::Escape);
    let (result, out) = run(Prompt::text("Name"), keys);

    let err = result.unwrap_err();
    assert!(matches!(err, PromptError::Cancelled));
    assert!(err.is_user_abort());
    assert!(out.ends_with("✖ Name: canceled\r\n"));
}

#[test]
fn test_interrupt_ends_checkbox() {
    let (result, out) = run(
        Prompt::checkbox("Options", items(), String::clone),
        vec![Key::Space, Key::Interrupt, Key::Enter],
    );

    assert!(matches!(result, Err(PromptError::Interrupted)));
    assert!(out.ends_with("✖ Options: terminated with SIGINT (130)\r\n"));
}

#[test]
fn test_exhausted_key_source_is_an_io_error() {
    let (result, out) = run(Prompt::text("Name"), typed("ab"));

    let err = result.unwrap_err();
    assert!(!err.is_user_abort());
    assert!(matches!(&err, PromptError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    assert!(out.contains("✖ Name: "));
}

#[test]
fn test_without_summary_prints_no_completion_line() {
    let (result, out) = run(Prompt::text("Name").without_summary(), typed("a"));
    assert!(result.is_err());
    assert!(!out.contains('✖'));

    let (_, out) = run(Prompt::text("Name").without_summary(), vec![Key::Enter]);
    assert!(!out.contains('✔'));
}

#[test]
fn test_without_header() {
    let (result, out) = run(Prompt::text("Name").without_header(), vec![Key::Enter]);

    assert!(result.is_ok());
    assert!(!out.contains("? Name"));
    assert!(out.ends_with("✔ Name: \r\n"));
}

#[test]
fn test_custom_hint() {
    let prompt = Prompt::text("Name").with_hint("(required) ");
    let (_, out) = run(prompt, vec![Key::Enter]);

    assert!(out.starts_with("? Name: (required) "));
}

#[test]
fn test_colors_disabled_emit_no_styling() {
    let (_, out) = run(Prompt::confirm("Sure", Some(true)), vec![Key::Enter]);

    assert!(!out.contains("\x1b[36m"));
    assert!(!out.contains("\x1b[90m"));
    assert!(!out.contains("\x1b[32m"));
}

#[test]
fn test_colors_enabled_style_header_and_completion() {
    let (_, out) = run_with_theme(
        Prompt::confirm("Sure", Some(true)),
        vec![Key::Enter],
        Theme::new(true),
    );

    assert!(out.starts_with("\x1b[36m?\x1b[39m Sure: \x1b[90m[Y/n] \x1b[39m"));
    assert!(out.contains("\x1b[32m✔\x1b[39m Sure: \x1b[90myes\x1b[39m"));
}

#[test]
fn test_prompt_accessors_reflect_construction() {
    let prompt = Prompt::text("Enter your Password").sensitive(true).with_hint("(hidden) ");

    assert_eq!(prompt.message(), "Enter your Password");
    assert_eq!(prompt.hint(), "(hidden) ");
    assert!(prompt.state().buffer().is_masked());
    assert!(prompt.state().buffer().is_empty());

    let prompt = Prompt::confirm("Sure", Some(false));
    assert_eq!(prompt.hint(), "[y/N] ");
}

#[test]
fn test_text_state_after_submit() {
    let mut keys = typed("abc");
    keys.extend([Key::Left, Key::Enter]);
    let state = run(Prompt::text("Word"), keys).0.unwrap();

    assert_eq!(state.buffer().value(), "abc");
    assert_eq!(state.buffer().cursor(), 2);
    assert!(!state.buffer().is_masked());
}

#[test]
fn test_selection_state_cursor_accessors() {
    let prompt = Prompt::select("Pick", items(), String::clone).with_starting_cursor(9);
    assert_eq!(prompt.state().cursor().index(), 3);

    let state = run(prompt, vec![Key::Down, Key::Enter]).0.unwrap();
    assert_eq!(state.cursor().index(), 0);

    let prompt = Prompt::checkbox("Options", items(), String::clone)
        .with_checked(|item| item.ends_with('4'))
        .with_starting_cursor(1);
    assert!(prompt.state().cursor().is_checked(3));
    assert_eq!(prompt.state().cursor().index(), 1);

    let state = run(prompt, vec![Key::Space, Key::Enter]).0.unwrap();
    assert!(state.cursor().is_checked(1));
    assert_eq!(state.cursor().checked_entries().count(), 2);
}

#[test]
fn test_custom_glyphs_are_drawn() {
    let glyphs = Glyphs::builder().prompt(">").completed("ok").mask('#').build();
    let theme = Theme::new(false).with_glyphs(glyphs);

    let mut keys = typed("pw");
    keys.push(Key::Enter);
    let (result, out) = run_with_theme(Prompt::text("Secret").sensitive(true), keys, theme);

    assert_eq!(result.unwrap().resolve(), "pw");
    assert!(out.starts_with("> Secret: "));
    assert!(out.ends_with("ok Secret: ##\r\n"));
}
