//! Topic sets the keyword is drawn from.
//!
//! A lexicon is a list of topics, each a category label with its words. The
//! built-in set is the Korean party-game list; a JSON file of the same shape
//! can replace it:
//!
//! ```json
//! { "name": "custom", "lang": "ko", "topics": [ { "name": "동물", "words": ["기린", "하마"] } ] }
//! ```

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("cannot read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed lexicon: {0}")]
    Json(#[from] serde_json::Error),
    #[error("lexicon has no topics")]
    NoTopics,
    #[error("topic '{0}' has no words")]
    EmptyTopic(String),
}

pub type LexiconResult<T> = Result<T, ErrorKind>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub name: String,
    #[serde(default)]
    pub lang: String,
    pub topics: Vec<Topic>,
}

const BUILTIN: [(&str, [&str; 10]); 5] = [
    ("동물", ["기린", "코끼리", "펭귄", "늑대", "하마", "토끼", "여우", "호랑이", "부엉이", "사자"]),
    ("과일", ["사과", "바나나", "수박", "포도", "딸기", "복숭아", "파인애플", "키위", "오렌지", "자두"]),
    ("직업", ["의사", "경찰", "소방관", "선생님", "요리사", "프로그래머", "운동선수", "가수", "배우", "디자이너"]),
    ("교통수단", ["자전거", "기차", "비행기", "버스", "자동차", "오토바이", "지하철", "택시", "트럭", "요트"]),
    ("음식", ["김치", "떡볶이", "치킨", "비빔밥", "라면", "초밥", "불고기", "스파게티", "피자", "햄버거"]),
];

impl Lexicon {
    /// Builds a lexicon, refusing one that could never yield a keyword.
    pub fn new(name: impl ToString, topics: Vec<Topic>) -> LexiconResult<Self> {
        let lexicon = Self {
            name: name.to_string(),
            lang: String::new(),
            topics,
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn builtin() -> Self {
        let topics = BUILTIN
            .iter()
            .map(|(name, words)| Topic {
                name: name.to_string(),
                words: words.iter().map(|w| w.to_string()).collect(),
            })
            .collect();
        Self {
            name: "builtin".to_string(),
            lang: "ko".to_string(),
            topics,
        }
    }

    pub fn from_json(json: &str) -> LexiconResult<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn load(path: impl AsRef<Path>) -> LexiconResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> LexiconResult<()> {
        if self.topics.is_empty() {
            return Err(ErrorKind::NoTopics);
        }
        if let Some(topic) = self.topics.iter().find(|t| t.words.is_empty()) {
            return Err(ErrorKind::EmptyTopic(topic.name.clone()));
        }
        Ok(())
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Uniform topic, then a uniform word inside it. Returns `(topic, keyword)`.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> LexiconResult<(String, String)> {
        let topic = self.topics.choose(rng).ok_or(ErrorKind::NoTopics)?;
        let word = topic
            .words
            .choose(rng)
            .ok_or_else(|| ErrorKind::EmptyTopic(topic.name.clone()))?;
        Ok((topic.name.clone(), word.clone()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
