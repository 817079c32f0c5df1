//! Canned keyword responder
//!
//! Ordered substring matching over a fixed trigger table, with a small
//! pseudo-random fallback set. Pure string-in string-out; the artificial
//! typing delay lives in the chat engine, not here.

use async_trait::async_trait;
use rand::Rng;

use crate::base::{Responder, ResponderResult};

/// Trigger keywords and their replies, checked in order; the first rule
/// with any matching keyword wins.
const REPLY_RULES: &[(&[&str], &str)] = &[
    (
        &["สวัสดี", "hello", "hi"],
        "สวัสดีครับ! ยินดีต้อนรับสู่ Zenith Comp AI Assistant 🎉\n\nผมพร้อมช่วยเหลือคุณในเรื่องต่าง ๆ เช่น:\n• การเขียนโปรแกรม\n• การแก้ไขปัญหาโค้ด\n• คำแนะนำด้านเทคโนโลยี\n• การเรียนรู้สิ่งใหม่ ๆ\n\nมีอะไรให้ช่วยไหมครับ? 😊",
    ),
    (
        &["zenith", "บริษัท"],
        "Zenith Comp เป็นบริษัทเทคโนโลยีชั้นนำที่มุ่งเน้นการนำเสนอโซลูชันด้าน AI และการพัฒนาซอฟต์แวร์ 🚀\n\n**วิสัยทัศน์:** \"Reaching the Peak of Innovation\"\n**พันธกิจ:** ส่งมอบโซลูชัน AI ที่ล้ำสมัยสำหรับธุรกิจสมัยใหม่\n\nเรามุ่งมั่นที่จะเป็นผู้นำในด้านนวัตกรรมเทคโนโลยี และช่วยให้ธุรกิจต่าง ๆ เติบโตด้วยพลังของ AI ครับ! ✨",
    ),
    (
        &["ช่วย", "help", "สามารถ"],
        "ผมสามารถช่วยเหลือคุณได้หลายเรื่องครับ! 💪\n\n**🔧 การเขียนโปรแกรม**\n• อธิบายแนวคิดและภาษาโปรแกรมมิ่ง\n• ช่วยดีบักและแก้ไขโค้ด\n• แนะนำ best practices\n\n**💡 เทคโนโลยี**\n• อธิบายเทคโนโลยีใหม่ ๆ\n• แนะนำเครื่องมือและเฟรมเวิร์ก\n• วางแผน learning path\n\n**🎯 โปรเจค**\n• ช่วยวางแผนและออกแบบระบบ\n• แนะนำสถาปัตยกรรมที่เหมาะสม\n• ให้คำปรึกษาด้านการพัฒนา\n\nลองถามอะไรเฉพาะเจาะจงมาดูครับ! 😄",
    ),
    (
        &["react", "javascript", "typescript"],
        "🚀 **React/JavaScript/TypeScript Development**\n\nเยี่ยมเลย! เหล่านี้เป็นเทคโนโลยีที่สำคัญมากในปัจจุบันครับ\n\n**React:**\n• Component-based architecture\n• Hooks และ State Management\n• Performance optimization\n• Modern patterns\n\n**TypeScript:**\n• Type safety และ better DX\n• Interface และ Generic types\n• Advanced type manipulation\n\n**มีคำถามเฉพาะเจาะจงไหมครับ?** เช่น:\n• ต้องการความช่วยเหลือเรื่องโค้ด?\n• อยากเรียนรู้แนวคิดใหม่ ๆ?\n• มีปัญหาที่ติดค้างอยู่?\n\nยินดีช่วยเหลือครับ! 💻✨",
    ),
    (
        &["วิป", "vip", "phatra"],
        "👨‍💻 **เกี่ยวกับวิป (Phatra Wongsapsakul)**\n\nวิปเป็นนักศึกษา ICT ปี 3 → 4 จากมหาวิทยาลัยมหิดล ที่สร้างผมขึ้นมา! 🎓\n\n**ความสนใจหลัก:**\n• Frontend Development (React, TypeScript)\n• Full-stack Development\n• UI/UX Design\n• Modern Web Technologies\n\n**โปรเจคที่น่าประทับใจ:**\n• VipStore - E-commerce Platform\n• Personal Portfolio Website\n• และตอนนี้กำลังพัฒนา ChatBot นี้!\n\nเขาเป็นคนที่มีความมุ่งมั่นและใฝ่รู้ในด้านเทคโนโลยีมากครับ! 🌟",
    ),
    (
        &["python", "ai", "machine learning"],
        "🤖 **AI & Python Development**\n\nเทคโนโลยีที่กำลังเป็นที่นิยมมากในตอนนี้เลยครับ!\n\n**Python for AI:**\n• TensorFlow, PyTorch สำหรับ Machine Learning\n• Pandas, NumPy สำหรับ Data Science\n• FastAPI สำหรับ Backend Development\n• LangChain สำหรับ AI Applications\n\n**AI Technologies:**\n• Large Language Models (LLMs)\n• Computer Vision\n• Natural Language Processing\n• Generative AI\n\nต้องการเรียนรู้เรื่องไหนเป็นพิเศษไหมครับ? 🚀",
    ),
];

/// Replies used when nothing in the trigger table matches
const FALLBACK_REPLIES: &[&str] = &[
    "น่าสนใจมากครับ! 🤔 ผมกำลังประมวลผลข้อมูลที่คุณส่งมา และพร้อมให้ความช่วยเหลือเพิ่มเติม\n\nมีอะไรเฉพาะเจาะจงที่ต้องการความช่วยเหลือไหมครับ?",
    "ขอบคุณสำหรับข้อมูลครับ! 😊 ผมเข้าใจสิ่งที่คุณต้องการแล้ว\n\nหากมีคำถามเพิ่มเติมหรือต้องการคำแนะนำในเรื่องใด ๆ สามารถถามมาได้เลยครับ!",
    "เยี่ยมเลยครับ! 🌟 ผมพร้อมช่วยเหลือในทุกเรื่องที่เกี่ยวข้องกับเทคโนโลยีและการพัฒนา\n\nลองบอกรายละเอียดเพิ่มเติมมาดูไหมครับ?",
    "เข้าใจแล้วครับ! 💡 เป็นเรื่องที่น่าสนใจมาก\n\nถ้าต้องการคำแนะนำเพิ่มเติมหรือมีปัญหาที่ต้องการแก้ไข บอกมาได้เลยครับ!",
];

/// Find the reply for the first rule whose keyword occurs in the
/// lowercase-normalized input, if any.
pub fn match_reply(input: &str) -> Option<&'static str> {
    let input = input.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| input.contains(t)))
        .map(|(_, reply)| *reply)
}

/// Pick one of the fallback replies pseudo-randomly
pub fn fallback_reply() -> &'static str {
    let idx = rand::rng().random_range(0..FALLBACK_REPLIES.len());
    FALLBACK_REPLIES[idx]
}

/// The keyword-matching reply backend
#[derive(Debug, Default)]
pub struct CannedResponder;

impl CannedResponder {
    /// Create a new canned responder
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, input: &str) -> ResponderResult<String> {
        let reply = match_reply(input).unwrap_or_else(fallback_reply);
        Ok(reply.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_matches_thai_and_english() {
        let thai = match_reply("สวัสดีครับผม").unwrap();
        assert!(thai.contains("ยินดีต้อนรับ"));
        // All-Thai text, no stray Japanese glyphs
        assert!(thai.contains("เทคโนโลยี"));
        assert!(!thai.contains('ジ'));

        let english = match_reply("Hello there").unwrap();
        assert_eq!(thai, english);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(match_reply("REACT hooks").unwrap().contains("React"));
        assert!(match_reply("Zenith คืออะไร").unwrap().contains("Zenith Comp"));
    }

    #[test]
    fn test_rules_apply_in_order() {
        // Both the greeting and the python rule could match; the greeting
        // rule comes first in the table.
        let reply = match_reply("สวัสดี python").unwrap();
        assert!(reply.contains("ยินดีต้อนรับ"));
    }

    #[test]
    fn test_no_trigger_means_no_match() {
        assert!(match_reply("ฝนตกทั้งวัน").is_none());
    }

    #[test]
    fn test_fallback_comes_from_fixed_set() {
        for _ in 0..20 {
            let reply = fallback_reply();
            assert!(FALLBACK_REPLIES.contains(&reply));
        }
    }

    #[tokio::test]
    async fn test_responder_always_returns_some_string() {
        let responder = CannedResponder::new();

        let matched = responder.respond("help me please").await.unwrap();
        assert!(matched.contains("ผมสามารถช่วยเหลือ"));

        let fallback = responder.respond("ฝนตกทั้งวัน").await.unwrap();
        assert!(FALLBACK_REPLIES.contains(&fallback.as_str()));
    }
}
