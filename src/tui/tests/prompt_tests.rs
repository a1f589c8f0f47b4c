use super::{frames, session, ten_by_ten};
use crate::tui::{Entry, InputClosed, IntPrompt, NoticeReply, TextPrompt, Verdict, notice};

fn one_to_ten() -> IntPrompt {
    IntPrompt::builder()
        .title("[Pick]")
        .min(1)
        .max(10)
        .build()
}

#[test]
fn test_int_validate_order() {
    let prompt = one_to_ten();

    assert_eq!(
        prompt.validate(Entry::Malformed),
        Verdict::Retry("Invalid input! Please enter an integer.".to_string())
    );
    assert_eq!(prompt.validate(Entry::Value(0)), Verdict::Abort(0));
    assert_eq!(
        prompt.validate(Entry::Value(15)),
        Verdict::Retry("Invalid input! Please enter a valid option.".to_string())
    );
    assert_eq!(prompt.validate(Entry::Value(5)), Verdict::Commit(5));
}

#[test]
fn test_int_sentinel_is_not_range_checked() {
    let prompt = IntPrompt::builder()
        .title("t")
        .min(1)
        .max(10)
        .abort_sentinels(vec![-1])
        .build();

    assert_eq!(prompt.validate(Entry::Value(-1)), Verdict::Abort(-1));
    assert!(matches!(prompt.validate(Entry::Value(0)), Verdict::Retry(_)));
}

#[test]
fn test_int_prompt_commits_valid_value() {
    let mut session = session("5\n");
    let result = one_to_ten().run(&mut session, ten_by_ten()).unwrap();

    assert_eq!(result.value, 5);
    assert!(!result.aborted);
    assert_eq!(result.echo_text, " >> Enter your choice: 5\n");
    assert_eq!(frames(&session).len(), 1);
}

#[test]
fn test_int_prompt_retries_on_malformed_input() {
    let mut session = session("abc\n5\n");
    let result = one_to_ten().run(&mut session, ten_by_ten()).unwrap();

    assert_eq!(result.value, 5);
    let frames = frames(&session);
    assert_eq!(frames.len(), 2);
    assert!(!frames[0].contains("##"));
    assert!(frames[1].contains("## Invalid input! Please enter an integer. ##"));
}

#[test]
fn test_int_prompt_retries_on_out_of_range() {
    let mut session = session("15\n5\n");
    let result = one_to_ten().run(&mut session, ten_by_ten()).unwrap();

    assert_eq!(result.value, 5);
    let frames = frames(&session);
    assert_eq!(frames.len(), 2);
    assert!(frames[1].contains("## Invalid input! Please enter a valid option. ##"));
}

#[test]
fn test_int_prompt_aborts_on_sentinel() {
    let mut session = session("0\n");
    let result = one_to_ten().run(&mut session, ten_by_ten()).unwrap();

    assert!(result.aborted);
    assert_eq!(result.value, 0);
    assert_eq!(frames(&session).len(), 1);
}

#[test]
fn test_int_prompt_error_clears_after_next_invalid_kind() {
    let mut session = session("x\n42\n3\n");
    one_to_ten().run(&mut session, ten_by_ten()).unwrap();

    let frames = frames(&session);
    assert_eq!(frames.len(), 3);
    assert!(frames[1].contains("enter an integer"));
    assert!(frames[2].contains("enter a valid option"));
    assert!(!frames[2].contains("enter an integer"));
}

#[test]
fn test_int_prompt_survives_long_invalid_streak() {
    let mut input = "nope\n".repeat(2_000);
    input.push_str("7\n");
    let mut session = session(&input);

    let result = one_to_ten().run(&mut session, ten_by_ten()).unwrap();
    assert_eq!(result.value, 7);
}

#[test]
fn test_int_prompt_rejects_empty_range() {
    let mut session = session("5\n");
    let prompt = IntPrompt::builder().title("t").min(3).max(2).build();
    assert!(prompt.run(&mut session, ten_by_ten()).is_err());
}

#[test]
fn test_int_prompt_reports_closed_input() {
    let mut session = session("abc\n");
    let err = one_to_ten().run(&mut session, ten_by_ten()).unwrap_err();
    assert!(err.is::<InputClosed>());
}

#[test]
fn test_int_prompt_echo_accumulates() {
    let mut session = session("4\n");
    let result = one_to_ten()
        .run_after(&mut session, ten_by_ten(), " >> Earlier: 1\n")
        .unwrap();

    assert_eq!(result.echo_text, " >> Earlier: 1\n >> Enter your choice: 4\n");
    assert!(frames(&session)[0].ends_with(" >> Earlier: 1\n >> Enter your choice: "));
}

#[test]
fn test_text_validate() {
    let required = TextPrompt::builder().title("t").build();
    assert_eq!(
        required.validate(String::new()),
        Verdict::Retry("Invalid input! Please enter a non-empty string.".to_string())
    );
    assert_eq!(
        required.validate("Jane".to_string()),
        Verdict::Commit("Jane".to_string())
    );

    let optional = TextPrompt::builder().title("t").empty_message("").build();
    assert_eq!(optional.validate(String::new()), Verdict::Commit(String::new()));
}

#[test]
fn test_text_sentinel_wins_over_emptiness() {
    let prompt = TextPrompt::builder()
        .title("t")
        .abort_sentinels(vec![String::new()])
        .build();

    assert_eq!(prompt.validate(String::new()), Verdict::Abort(String::new()));
}

#[test]
fn test_text_prompt_retries_until_non_empty() {
    let mut session = session("\n\nJane\n");
    let result = TextPrompt::builder()
        .title("[Name]")
        .build()
        .run(&mut session, ten_by_ten())
        .unwrap();

    assert_eq!(result.value, "Jane");
    assert_eq!(result.echo_text, " >> Enter input: Jane\n");
    assert_eq!(frames(&session).len(), 3);
}

#[test]
fn test_notice_shows_message_on_first_frame() {
    let mut session = session("\n");
    let reply = notice(
        &mut session,
        ten_by_ten(),
        "[Create Seat Reservation]",
        "[0] Create another",
        Some("The seat [11, 1] does not exist."),
        "0",
    )
    .unwrap();

    assert_eq!(reply, NoticeReply::Continue);
    assert!(frames(&session)[0].contains("## The seat [11, 1] does not exist. ##"));
}

#[test]
fn test_notice_again_on_sentinel() {
    let mut session = session("0\n");
    let reply = notice(&mut session, ten_by_ten(), "t", "", None, "0").unwrap();
    assert_eq!(reply, NoticeReply::Again);
}

#[test]
fn test_rendering_twice_without_input_is_identical() {
    let mut first = session("5\n");
    let mut second = session("5\n");
    one_to_ten().run(&mut first, ten_by_ten()).unwrap();
    one_to_ten().run(&mut second, ten_by_ten()).unwrap();

    assert_eq!(first.console.output(), second.console.output());
}
