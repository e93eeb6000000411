use braincare_core::model::seed::seed_articles;
use braincare_core::{project, Article, ArticleProjection, Category, CategoryFilter};

fn article(id: &str, title: &str, category: Category, tags: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: String::new(),
        content: "body".to_string(),
        code: None,
        language: None,
        category,
        author: "Admin".to_string(),
        date: "2024-01-01".to_string(),
        image: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn fixture() -> Vec<Article> {
    vec![
        article("1", "Prompt Caching", Category::Llm, &["Latency"]),
        article("2", "Planner Loops", Category::Agent, &["tools", "prompting"]),
        article("3", "Zero-copy Parsing", Category::Code, &["Rust"]),
        article("4", "Side Project", Category::Project, &[]),
        article("5", "Tokenizers", Category::Llm, &["BPE"]),
    ]
}

fn ids(items: &[&Article]) -> Vec<String> {
    items.iter().map(|a| a.id.clone()).collect()
}

fn is_subsequence(sub: &[&Article], full: &[Article]) -> bool {
    let mut remaining = full.iter();
    sub.iter()
        .all(|wanted| remaining.any(|candidate| candidate.id == wanted.id))
}

#[test]
fn all_with_empty_query_is_identity() {
    let records = fixture();
    let visible = project(&records, CategoryFilter::All, "");
    assert_eq!(visible.len(), records.len());
    assert!(visible.iter().zip(&records).all(|(a, b)| *a == b));
}

#[test]
fn category_filter_keeps_only_exact_matches() {
    let records = vec![
        article("a", "LLM post", Category::Llm, &[]),
        article("b", "Agent post", Category::Agent, &[]),
    ];
    let visible = project(&records, CategoryFilter::Only(Category::Llm), "");
    assert_eq!(ids(&visible), vec!["a"]);
}

#[test]
fn query_matches_title_or_any_tag_case_insensitively() {
    let records = fixture();
    assert_eq!(ids(&project(&records, CategoryFilter::All, "PROMPT")), vec!["1", "2"]);
    assert_eq!(ids(&project(&records, CategoryFilter::All, "rust")), vec!["3"]);
    assert!(project(&records, CategoryFilter::All, "kubernetes").is_empty());
}

#[test]
fn category_and_query_must_both_pass() {
    let records = fixture();
    let visible = project(&records, CategoryFilter::Only(Category::Llm), "token");
    assert_eq!(ids(&visible), vec!["5"]);
}

#[test]
fn every_projection_is_an_ordered_subsequence() {
    let records = fixture();
    let mut categories = vec![CategoryFilter::All];
    categories.extend(Category::ALL.into_iter().map(CategoryFilter::Only));

    for category in categories {
        for query in ["", "p", "O", "rust", "s", "nothing-matches"] {
            let visible = project(&records, category, query);
            assert!(
                is_subsequence(&visible, &records),
                "{category:?}/{query} broke ordering"
            );
        }
    }
}

#[test]
fn cached_projection_recomputes_only_on_input_change() {
    let records = seed_articles();
    let mut projection = ArticleProjection::new();

    let first = ids(&projection.visible(0, &records, CategoryFilter::All, ""));
    let second = ids(&projection.visible(0, &records, CategoryFilter::All, ""));
    assert_eq!(first, second);
    assert_eq!(projection.recomputations(), 1);

    let llm = projection.visible(0, &records, CategoryFilter::Only(Category::Llm), "");
    assert_eq!(ids(&llm), vec!["1"]);
    assert_eq!(projection.recomputations(), 2);

    projection.visible(1, &records, CategoryFilter::Only(Category::Llm), "");
    assert_eq!(projection.recomputations(), 3);

    projection.invalidate();
    projection.visible(1, &records, CategoryFilter::Only(Category::Llm), "");
    assert_eq!(projection.recomputations(), 4);
}
