//! Integration tests for the interactive draft session

use std::io::Cursor;

use draft_helper::{
    commands::{
        session::{farewell, DraftSession, Flow},
        Command,
    },
    core::UndoOutcome,
    storage::PlayerPool,
    PlayerId,
};

const BOARD: &str = "\
Full Name,Position,Team Abbrev,Adjusted Projected Points,Projected Fantasy Points,ADP,Positional Rank,Rank
Patrick Mahomes,QB,KC,370.0,365.0,30.0,2,25
Josh Allen,QB,BUF,385.0,380.0,22.0,1,20
Aaron Jones,RB,MIN,215.0,210.0,45.0,20,50
Zay Jones,WR,ARI,110.0,105.0,200.0,80,210
Bijan Robinson,RB,ATL,300.0,298.0,2.0,1,1
Christian McCaffrey,RB,SF,305.0,300.0,3.0,2,2
Jahmyr Gibbs,RB,DET,280.0,276.0,4.0,3,3
Saquon Barkley,RB,PHI,270.0,268.0,6.0,4,4
Breece Hall,RB,NYJ,250.0,249.0,15.0,5,14
De'Von Achane,RB,MIA,245.0,240.0,13.0,6,12
Kenneth Walker III,RB,SEA,220.0,219.0,30.0,7,28
";

fn session(input: &str) -> DraftSession<Cursor<String>, Vec<u8>> {
    let pool = PlayerPool::from_reader(BOARD.as_bytes()).unwrap();
    DraftSession::new(pool, Cursor::new(input.to_string()), Vec::new())
}

fn run(input: &str) -> (PlayerPool, String) {
    let mut session = session(input);
    session.run().unwrap();
    let pool = session.pool().clone();
    let text = String::from_utf8(session.into_output()).unwrap();
    (pool, text)
}

fn id_of(pool: &PlayerPool, name: &str) -> PlayerId {
    pool.players()
        .iter()
        .find(|p| p.full_name == name)
        .map(|p| p.id)
        .unwrap()
}

fn is_available(pool: &PlayerPool, name: &str) -> bool {
    pool.get(id_of(pool, name)).unwrap().available
}

#[test]
fn test_banner_and_initial_top_three() {
    let (_, text) = run("quit\n");
    assert!(text.starts_with("Loaded players: 11\nCommands:\n"));
    assert!(text.contains("Top 3 available:"));

    let top = text.split("Top 3 available:").nth(1).unwrap();
    let bijan = top.find("Bijan Robinson").unwrap();
    let cmc = top.find("Christian McCaffrey").unwrap();
    let gibbs = top.find("Jahmyr Gibbs").unwrap();
    assert!(bijan < cmc && cmc < gibbs);
    assert!(text.trim_end().ends_with("Bye!"));
}

#[test]
fn test_end_of_input_says_goodbye() {
    let (_, text) = run("");
    assert!(text.trim_end().ends_with("Bye!"));
}

#[test]
fn test_implicit_name_query_removes_player() {
    let (pool, text) = run("mahomes\n");
    assert!(text.contains("Removed from available: Patrick Mahomes (QB, KC)"));
    assert!(!is_available(&pool, "Patrick Mahomes"));
}

#[test]
fn test_fragment_query_removes_player() {
    let (pool, text) = run("mahom\n");
    assert!(text.contains("Removed from available: Patrick Mahomes (QB, KC)"));
    assert!(!is_available(&pool, "Patrick Mahomes"));
}

#[test]
fn test_explicit_remove_with_suffix() {
    let (pool, text) = run("rm kenneth walker\n");
    assert!(text.contains("Removed from available: Kenneth Walker III (RB, SEA)"));
    assert!(!is_available(&pool, "Kenneth Walker III"));
}

#[test]
fn test_no_match_changes_nothing() {
    let mut session = session("");
    assert_eq!(session.remove("Tom Brady").unwrap(), None);
    assert_eq!(session.pool().available_count(), 11);
    assert!(session.history().is_empty());

    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(text.contains("No available player matched 'Tom Brady'. Try typing more of the name."));
}

#[test]
fn test_ambiguous_surname_prompts_for_choice() {
    let mut session = session("2\n");
    let removed = session.remove("jones").unwrap();

    let zay = id_of(session.pool(), "Zay Jones");
    assert_eq!(removed, Some(zay));
    assert!(is_available(session.pool(), "Aaron Jones"));
    assert!(!is_available(session.pool(), "Zay Jones"));
    assert_eq!(session.history().len(), 1);

    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(text.contains("Multiple matches found."));
    let aaron_line = text.find("1  Aaron Jones").unwrap();
    let zay_line = text.find("2  Zay Jones").unwrap();
    assert!(aaron_line < zay_line);
    assert!(text.contains("Removed from available: Zay Jones (WR, ARI)"));
}

#[test]
fn test_cancelled_choice_removes_nobody() {
    let mut session = session("");
    assert_eq!(session.remove("jones").unwrap(), None);
    assert_eq!(session.pool().available_count(), 11);
    assert!(session.history().is_empty());
}

#[test]
fn test_remove_then_undo_restores_rank() {
    let mut session = session("");
    let before: Vec<_> = session
        .pool()
        .top_available(3, None)
        .iter()
        .map(|p| p.id)
        .collect();

    let bijan = session.remove("bijan robinson").unwrap().unwrap();
    assert!(!session.pool().top_available(3, None).iter().any(|p| p.id == bijan));

    assert_eq!(
        session.undo(1).unwrap(),
        UndoOutcome::Popped {
            popped: 1,
            restored: vec![bijan]
        }
    );
    let after: Vec<_> = session
        .pool()
        .top_available(3, None)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(before, after);

    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(text.contains("Restored: Bijan Robinson (RB, ATL)"));
}

#[test]
fn test_undo_on_empty_history() {
    let mut session = session("");
    assert_eq!(session.undo(1).unwrap(), UndoOutcome::Empty);
    assert_eq!(session.pool().available_count(), 11);

    let text = String::from_utf8(session.into_output()).unwrap();
    assert!(text.contains("Nothing to undo."));
}

#[test]
fn test_undo_many_in_loop() {
    let (pool, text) = run("gibbs\nbarkley\nhall\nundo 2\n");
    assert!(!is_available(&pool, "Jahmyr Gibbs"));
    assert!(is_available(&pool, "Saquon Barkley"));
    assert!(is_available(&pool, "Breece Hall"));

    let hall = text.find("Restored: Breece Hall").unwrap();
    let barkley = text.find("Restored: Saquon Barkley").unwrap();
    assert!(hall < barkley, "most recent removal is restored first");
}

#[test]
fn test_undo_usage_error_changes_nothing() {
    let (pool, text) = run("gibbs\nundo two\n");
    assert!(text.contains("Usage: undo [n]"));
    assert!(!is_available(&pool, "Jahmyr Gibbs"));
}

#[test]
fn test_position_listing_is_limited_to_five() {
    let (_, text) = run("rb\n");
    let listing = text.split("Top 5 available (RB):").nth(1).unwrap();
    let listing: Vec<_> = listing.lines().skip(2).take_while(|l| !l.starts_with('>')).collect();

    assert_eq!(listing.len(), 5);
    assert!(listing[0].starts_with("Christian McCaffrey"));
    assert!(listing.iter().all(|l| l.contains("RB")));
    assert!(!text.split("Top 5 available (RB):").nth(1).unwrap().contains("Kenneth Walker"));
}

#[test]
fn test_list_unknown_position_reports_empty() {
    let (_, text) = run("list lb\n");
    assert!(text.contains("No players available at LB"));
}

#[test]
fn test_help_and_blank_lines() {
    let (_, text) = run("\n\nhelp\nq\n");
    assert_eq!(text.matches("Commands:").count(), 2);
}

#[test]
fn test_save_from_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("remaining.csv");
    let input = format!("allen\nsave {}\n", path.display());

    let (_, text) = run(&input);
    assert!(text.contains(&format!("Saved remaining board to {}", path.display())));

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("Full Name,Position,Team,AdjPts,ProjPts,ADP,PosRank,Rank\n"));
    assert!(!saved.contains("Josh Allen"));
    assert_eq!(saved.lines().count(), 11);
}

#[test]
fn test_save_failure_keeps_loop_running() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("board.csv");
    let input = format!("save {}\ntop\n", path.display());

    let (_, text) = run(&input);
    assert!(text.contains("Failed to save"));
    assert_eq!(text.matches("Top 3 available:").count(), 2);
}

#[test]
fn test_execute_reports_flow() {
    let mut session = session("");
    assert_eq!(
        session.execute(Command::parse("remove mahomes")).unwrap(),
        Flow::Continue
    );
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.execute(Command::parse("undo")).unwrap(), Flow::Continue);
    assert!(session.history().is_empty());
    assert_eq!(session.execute(Command::parse("exit")).unwrap(), Flow::Exit);
    assert_eq!(session.pool().available_count(), 11);
}

#[test]
fn test_farewell_matches_end_of_input_goodbye() {
    let mut out = Vec::new();
    farewell(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\nBye!\n");

    let (_, text) = run("");
    assert!(text.ends_with("\nBye!\n"));
}
