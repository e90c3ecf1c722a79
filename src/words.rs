//! Candidate target words.
//!
//! The list is domain data, not configuration: culturally common Chinese
//! words that make reasonable hidden targets. At load time it is filtered
//! down to the words the embedding table actually knows.

use crate::embedding::EmbeddingModel;

/// Fixed list of common words eligible to be a target.
pub const COMMON_WORDS: [&str; 80] = [
    "太阳", "月亮", "星星", "天空", "大海", "山峰", "森林", "河流",
    "春天", "夏天", "秋天", "冬天", "花朵", "树木", "草地", "雨水",
    "音乐", "电影", "书籍", "绘画", "舞蹈", "诗歌", "故事", "梦想",
    "快乐", "幸福", "希望", "勇气", "智慧", "友情", "爱情", "亲情",
    "学校", "医院", "公园", "图书馆", "博物馆", "餐厅", "超市", "银行",
    "电脑", "手机", "汽车", "飞机", "火车", "轮船", "自行车", "摩托车",
    "早餐", "午餐", "晚餐", "水果", "蔬菜", "面包", "牛奶", "咖啡",
    "老师", "医生", "工程师", "艺术家", "科学家", "运动员", "作家", "歌手",
    "足球", "篮球", "游泳", "跑步", "登山", "滑雪", "网球", "乒乓球",
    "猫咪", "小狗", "兔子", "熊猫", "老虎", "狮子", "大象", "长颈鹿",
];

/// Filter `words` down to those the model has a vector for, preserving
/// order. Deterministic for a given table; an empty result is valid.
pub fn build_pool<M: EmbeddingModel>(model: &M, words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|w| model.contains(w))
        .cloned()
        .collect()
}

/// The default word list as owned strings.
pub fn default_words() -> Vec<String> {
    COMMON_WORDS.iter().map(|w| w.to_string()).collect()
}
