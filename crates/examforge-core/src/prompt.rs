//! Instruction sent to the hosted model for free-form exercise generation.

/// Sampling temperature for remote generation.
pub const TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens.
pub const MAX_TOKENS: u32 = 4096;

const ROLE: &str = "你是高考英语试卷二次开发专家，严格遵循【三纽扣还原法】，对上传的高考英语试卷进行二次开发。";

const METHOD: &str = "\
三纽扣还原法核心定义：
1. ⚡引擎纽扣：句子核心谓语动词，排除非谓语干扰
2. 🔗关节纽扣：句子连接词/引导词，拆解从句逻辑
3. ⚓锚点纽扣：核心介词词块、固定搭配，高考高频考点";

const MODULES: &str = "\
请基于下面的试卷内容，生成对应的练习，结构清晰，分模块展示：
1. 【核心长难句三纽扣拆解】：提取5句40词以上的长难句，每句都按三纽扣法拆解，标注考点
2. 【高频词汇练习】：提取20个试卷高频核心词汇/短语，给出中文释义、考点、例句
3. 【词性变形练习】：提取10个核心考点词汇，生成词性变形题，附答案
4. 【短语翻译练习】：提取10个试卷高频短语，生成中英互译题，附答案
5. 【语境填词练习】：基于试卷核心词汇，生成5道语境填空题，附答案
6. 【微写作题目】：基于试卷话题，生成1道50词左右的高考适配微写作题，给情境和开头示例";

/// Composes the single user message for a paper.
///
/// The paper text is embedded verbatim at the end.
pub fn compose(paper_text: &str) -> String {
    format!("{ROLE}\n{METHOD}\n\n{MODULES}\n\n试卷原文内容：\n{paper_text}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_all_three_buttons() {
        let prompt = compose("");
        assert!(prompt.contains("⚡引擎纽扣"));
        assert!(prompt.contains("🔗关节纽扣"));
        assert!(prompt.contains("⚓锚点纽扣"));
    }

    #[test]
    fn lists_six_modules_in_order() {
        let prompt = compose("");
        let positions: Vec<_> = ["1. 【核心", "2. 【高频", "3. 【词性", "4. 【短语", "5. 【语境", "6. 【微写作"]
            .iter()
            .map(|marker| prompt.find(marker).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn embeds_paper_text_last() {
        let paper = "Passage A\nThe quick brown fox.";
        let prompt = compose(paper);
        let at = prompt.find(paper).unwrap();
        assert!(at > prompt.find("6. 【微写作").unwrap());
        assert_eq!(prompt.trim_end(), &prompt[..at + paper.len()]);
    }
}
