//! Tests for article drafting

use signcontrol::core::models::{
    ArticleKind, ArticleRequest, Checkgroups, GroupDescription, NewsgroupName, Serial,
    SIGNED_HEADERS,
};
use signcontrol::core::services::{draft, expand_template};

use crate::common::{identity, issued_at};

fn newgroup_request(moderated: bool) -> ArticleRequest {
    ArticleRequest::NewGroup {
        group: NewsgroupName::parse("test.example.discuss").unwrap(),
        moderated,
        description: GroupDescription::new("A test group.", moderated, false).unwrap(),
        message: "Discussions about tests.\n\n".to_string(),
    }
}

#[test]
fn test_newgroup_draft() {
    let unsigned = draft(&newgroup_request(false), &identity(), &issued_at());
    let epoch = issued_at().timestamp();

    assert_eq!(unsigned.kind, ArticleKind::NewGroup);
    assert_eq!(unsigned.newsgroups, "test.example.discuss");
    assert_eq!(unsigned.stem, format!("test.example.discuss-{epoch}"));
    assert_eq!(
        unsigned.message_id,
        format!("<newgroup-test.example.discuss-{epoch}@news.example.org>")
    );
    assert_eq!(unsigned.header("Subject"), Some("newgroup test.example.discuss"));
    assert_eq!(unsigned.header("Control"), Some("newgroup test.example.discuss"));
    assert_eq!(unsigned.header("Date"), Some("Mon, 17 Nov 2008 09:05:03 -0300"));
    assert_eq!(unsigned.header("Injection-Date"), unsigned.header("Date"));
    assert_eq!(unsigned.header("From"), Some("Example Control <control@example.org>"));

    let expected_body = "This is a MIME NetNews control message.\n\
                         --signcontrol\n\
                         Content-Type: text/plain; charset=utf-8\n\
                         \n\
                         Discussions about tests.\n\
                         \n\
                         --signcontrol\n\
                         Content-Type: application/news-groupinfo; charset=utf-8\n\
                         \n\
                         For your newsgroups file:\n\
                         test.example.discuss\tA test group.\n\
                         \n\
                         --signcontrol--\n";
    assert_eq!(unsigned.body, expected_body);
}

#[test]
fn test_moderated_newgroup() {
    let unsigned = draft(&newgroup_request(true), &identity(), &issued_at());
    assert_eq!(unsigned.header("Control"), Some("newgroup test.example.discuss moderated"));
    assert!(unsigned.body.contains("test.example.discuss\tA test group. (Moderated)\n"));
}

#[test]
fn test_rendered_draft_layout() {
    let text = draft(&newgroup_request(false), &identity(), &issued_at()).render();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "X-Signed-Headers: Subject,Control,Message-ID,Date,Injection-Date,From"
    );
    for (line, name) in lines[1..=SIGNED_HEADERS.len()].iter().zip(SIGNED_HEADERS) {
        assert!(line.starts_with(&format!("{name}: ")), "{line} should be {name}");
    }
    assert_eq!(lines[SIGNED_HEADERS.len() + 1], "");
    assert_eq!(lines[SIGNED_HEADERS.len() + 2], "This is a MIME NetNews control message.");
}

#[test]
fn test_rmgroup_draft() {
    let request = ArticleRequest::RmGroup {
        group: NewsgroupName::parse("fr.test.old").unwrap(),
        message: "fr.test.old is removed.\n\n\n".to_string(),
    };
    let unsigned = draft(&request, &identity(), &issued_at());

    assert_eq!(unsigned.header("Control"), Some("rmgroup fr.test.old"));
    assert_eq!(unsigned.newsgroups, "fr.test.old");
    assert_eq!(unsigned.body, "fr.test.old is removed.\n");
}

#[test]
fn test_checkgroups_draft() {
    let groups = Checkgroups::parse("demo.test\t\tTesting of posting.\n").unwrap();
    let request = ArticleRequest::Checkgroups {
        scope: "demo".to_string(),
        admin_group: "demo.admin.news".to_string(),
        serial: Serial::new(3).unwrap(),
        groups,
    };
    let unsigned = draft(&request, &identity(), &issued_at());
    let epoch = issued_at().timestamp();

    assert_eq!(unsigned.header("Control"), Some("checkgroups demo #2008111703"));
    assert_eq!(unsigned.newsgroups, "demo.admin.news");
    assert_eq!(unsigned.stem, format!("checkgroups-{epoch}"));
    assert_eq!(unsigned.message_id, format!("<checkgroups-{epoch}@news.example.org>"));
    assert_eq!(unsigned.body, "demo.test\t\tTesting of posting.\n");
}

#[test]
fn test_expand_template() {
    assert_eq!(
        expand_template("$GROUP$ is created. Read $GROUP$.", "fr.test"),
        "fr.test is created. Read fr.test."
    );
    assert_eq!(expand_template("No placeholder.", "fr.test"), "No placeholder.");
}
