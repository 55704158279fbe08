//! Integration tests for rapid_qa

use rapid_qa::*;
use std::fs;

/// Small encyclopedia-style corpus for testing
const PYTHON: &str = "\
Python is a high-level, general-purpose programming language.
Its design philosophy emphasizes code readability with the use of significant indentation.
Guido van Rossum began working on Python in the late 1980s.";

const RUST: &str = "\
Rust is a multi-paradigm, general-purpose programming language that emphasizes performance.
Rust enforces memory safety without a garbage collector. The borrow checker tracks lifetimes.
Graydon Hoare began Rust as a personal project in 2006.";

const NEURAL: &str = "\
Neural networks are computing systems inspired by biological neural networks.
A neural network is based on a collection of connected units called artificial neurons.
Training a network adjusts the weights of the connections.";

fn corpus() -> Corpus {
    Corpus::from_documents([
        ("python.txt", PYTHON),
        ("rust.txt", RUST),
        ("neural_network.txt", NEURAL),
    ])
}

#[test]
fn test_cat_scenario() {
    let tokenizer = Tokenizer::english();
    let corpus = Corpus::from_documents([
        ("doc1", "The cat sat on the mat."),
        ("doc2", "Dogs bark at cats."),
    ]);

    let documents = corpus.tokenize(&tokenizer);
    let idfs = compute_idfs(&documents);
    let query = Query::parse("cat", &tokenizer);

    let files = top_files(&query, &documents, &idfs, 1);
    assert_eq!(files, vec!["doc1".to_string()]);

    let mut sentences = DocumentSet::new();
    for name in &files {
        let text = corpus.get(name).unwrap();
        for sentence in tokenizer.split_sentences(text) {
            let tokens = tokenizer.tokenize(&sentence);
            if !tokens.is_empty() {
                sentences.insert(sentence, tokens);
            }
        }
    }
    let sentence_idfs = compute_idfs(&sentences);

    let top = top_sentences(&query, &sentences, &sentence_idfs, 1);
    assert_eq!(top, vec!["The cat sat on the mat.".to_string()]);
}

#[test]
fn test_full_pipeline() {
    let qa = QuestionAnswerer::new(corpus(), QaConfig::default()).unwrap();

    let answer = qa.answer("What does the borrow checker track?");
    assert_eq!(answer.documents[0].id, "rust.txt");
    assert_eq!(
        answer.best_sentence(),
        Some("The borrow checker tracks lifetimes.")
    );

    let answer = qa.answer("Who began working on Python?");
    assert_eq!(answer.documents[0].id, "python.txt");
    assert_eq!(
        answer.best_sentence(),
        Some("Guido van Rossum began working on Python in the late 1980s.")
    );
}

#[test]
fn test_multiple_matches() {
    let config = QaConfig::default()
        .with_file_matches(3)
        .with_sentence_matches(4);
    let qa = QuestionAnswerer::new(corpus(), config).unwrap();
    let answer = qa.answer("general-purpose programming language");

    assert_eq!(answer.documents.len(), 3);
    // "neural_network.txt" never mentions the query words.
    assert_eq!(answer.documents[2].id, "neural_network.txt");
    assert_eq!(answer.documents[2].score, 0.0);
    assert_eq!(answer.sentences.len(), 4);

    for pair in answer.sentences.windows(2) {
        assert!(pair[0].idf_score >= pair[1].idf_score);
    }
}

#[test]
fn test_unknown_words_do_not_fail() {
    let qa = QuestionAnswerer::new(corpus(), QaConfig::default()).unwrap();
    let answer = qa.answer("xylophone quasar");

    assert_eq!(answer.documents.len(), 1);
    assert_eq!(answer.documents[0].score, 0.0);
    assert!(answer.sentences.iter().all(|s| s.idf_score == 0.0 && s.density == 0.0));
}

#[test]
fn test_load_dir_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("python.txt"), PYTHON).unwrap();
    fs::write(dir.path().join("rust.txt"), RUST).unwrap();
    fs::write(dir.path().join("README.md"), "Rust Rust Rust borrow checker").unwrap();

    let qa = QuestionAnswerer::from_dir(dir.path(), QaConfig::default()).unwrap();
    assert_eq!(qa.corpus().len(), 2);

    let answer = qa.answer("garbage collector");
    assert_eq!(
        answer.best_sentence(),
        Some("Rust enforces memory safety without a garbage collector.")
    );
}

#[test]
fn test_load_dir_uses_raw_text() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quotes.txt"), "It's \"quoted\".\nNext line.").unwrap();

    let corpus = Corpus::load_dir(dir.path(), &["txt"]).unwrap();
    let tokens = corpus.tokenize(&Tokenizer::english());
    // No list brackets, quotes or escaped newlines leak into the tokens.
    assert_eq!(
        tokens.get("quotes.txt").unwrap(),
        &["quoted".to_string(), "next".to_string(), "line".to_string()][..]
    );
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("qa.json");
    fs::write(
        &config_path,
        r#"{ "sentence_matches": 2, "stopwords": ["rust"], "single_thread": true }"#,
    )
    .unwrap();

    let config = QaConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.sentence_matches, 2);

    let qa = QuestionAnswerer::new(corpus(), config).unwrap();
    assert!(qa.parse_query("rust").is_empty());
    assert!(qa.answer("rust").is_empty());
}

#[test]
fn test_missing_directory_is_io_error() {
    let err = QuestionAnswerer::from_dir("/no/such/corpus", QaConfig::default()).unwrap_err();
    assert!(matches!(err, QaError::Io { .. }));
}

#[test]
fn test_answer_json() {
    let qa = QuestionAnswerer::new(corpus(), QaConfig::default()).unwrap();
    let json = qa.answer("neural networks").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["documents"][0]["id"], "neural_network.txt");
    assert!(value["sentences"][0]["text"].is_string());
}
