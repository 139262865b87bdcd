use crate::catalog::Kit;
use crate::domain::models::Recommendation;
use serde::{Deserialize, Serialize};

pub const PRODUCT_WEIGHT: u32 = 25;
pub const EXPERIENCE_WEIGHT: u32 = 20;
pub const TEAM_WEIGHT: u32 = 10;
pub const TIMELINE_WEIGHT: u32 = 15;
pub const PRIORITY_WEIGHT: u32 = 15;
pub const TECH_WEIGHT: u32 = 5;
pub const MAX_SCORE: u32 = 100;

/// Kits scoring at or below this are never recommended.
pub const MIN_RECOMMEND_SCORE: u32 = 20;
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub product: Option<String>,
    pub level: Option<String>,
    pub team: Option<String>,
    pub timeline: Option<String>,
    pub priority: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

fn hit(accepted: &[String], answer: Option<&String>) -> bool {
    answer.map(|a| accepted.contains(a)).unwrap_or(false)
}

/// Weighted compatibility of `kit` with `answers`, clamped to 0..=100.
pub fn score(kit: &Kit, answers: Option<&QuizAnswers>) -> u32 {
    let (Some(a), Some(rf)) = (answers, kit.recommended_for.as_ref()) else {
        return 0;
    };

    let mut total = 0;
    if hit(&rf.product, a.product.as_ref()) {
        total += PRODUCT_WEIGHT;
    }
    if hit(&rf.experience, a.level.as_ref()) {
        total += EXPERIENCE_WEIGHT;
    }
    if hit(&rf.team, a.team.as_ref()) {
        total += TEAM_WEIGHT;
    }
    if hit(&rf.timeline, a.timeline.as_ref()) {
        total += TIMELINE_WEIGHT;
    }
    if hit(&rf.priorities, a.priority.as_ref()) {
        total += PRIORITY_WEIGHT;
    }
    for t in &a.tech {
        if rf.tech.contains(t) {
            total += TECH_WEIGHT;
        }
    }

    total.min(MAX_SCORE)
}

/// Top kits for `answers`: scores above the threshold, best first, ties in
/// catalog order, at most three.
pub fn recommend(kits: &[Kit], answers: Option<&QuizAnswers>) -> Vec<Recommendation> {
    let mut scored: Vec<(u32, &Kit)> = kits
        .iter()
        .map(|k| {
            if k.recommended_for.is_none() {
                log::warn!("kit {} has no recommendation profile; scoring 0", k.id);
            }
            (score(k, answers), k)
        })
        .filter(|(s, _)| *s > MIN_RECOMMEND_SCORE)
        .collect();
    // sort_by is stable, so equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(MAX_RECOMMENDATIONS);
    log::debug!("ranked {} of {} kits", scored.len(), kits.len());

    scored
        .into_iter()
        .map(|(s, k)| Recommendation {
            kit: k.id,
            name: k.name.clone(),
            description: k.description.clone(),
            score: s,
            why: k.use_cases.iter().take(2).cloned().collect(),
            skill_level: k.skill_level.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kit(id: u32, profile: serde_json::Value) -> Kit {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("kit-{}", id),
            "description": "",
            "category": "Backend",
            "recommendedFor": profile,
            "useCases": ["one", "two", "three"],
            "skillLevel": "Beginner",
        }))
        .unwrap()
    }

    fn answers(product: &str, level: &str, tech: &[&str]) -> QuizAnswers {
        QuizAnswers {
            product: Some(product.to_string()),
            level: Some(level.to_string()),
            team: Some("Solo".to_string()),
            timeline: Some("MVP (Weeks)".to_string()),
            priority: Some("Fast Setup".to_string()),
            tech: tech.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn weighted_sum_matches_reference_scenario() {
        let k = kit(
            1,
            json!({
                "product": ["Backend"], "experience": ["Beginner"], "team": [],
                "timeline": [], "priorities": [], "tech": ["Python"]
            }),
        );
        let a = answers("Backend", "Beginner", &["Python"]);
        assert_eq!(score(&k, Some(&a)), 50);
    }

    #[test]
    fn missing_answers_or_profile_scores_zero() {
        let with_profile = kit(1, json!({"product": ["Backend"]}));
        assert_eq!(score(&with_profile, None), 0);

        let without: Kit = serde_json::from_value(json!({
            "id": 2, "name": "bare", "description": "", "category": "CI/CD"
        }))
        .unwrap();
        let a = answers("Backend", "Beginner", &[]);
        assert_eq!(score(&without, Some(&a)), 0);
    }

    #[test]
    fn nothing_matching_scores_zero() {
        let k = kit(
            1,
            json!({
                "product": ["Mobile App"], "experience": ["Advanced"], "team": ["2-5"],
                "timeline": ["Production (Months)"], "priorities": ["Scalability"], "tech": ["Java"]
            }),
        );
        let a = answers("Backend", "Beginner", &["Python"]);
        assert_eq!(score(&k, Some(&a)), 0);
    }

    #[test]
    fn score_is_clamped_to_hundred() {
        let tech: Vec<String> = (0..20).map(|i| format!("t{}", i)).collect();
        let k = kit(
            1,
            json!({
                "product": ["Backend"], "experience": ["Beginner"], "team": ["Solo"],
                "timeline": ["MVP (Weeks)"], "priorities": ["Fast Setup"], "tech": tech
            }),
        );
        let refs: Vec<&str> = tech.iter().map(|s| s.as_str()).collect();
        let a = answers("Backend", "Beginner", &refs);
        assert_eq!(score(&k, Some(&a)), MAX_SCORE);
    }

    #[test]
    fn partial_profile_facets_count_as_empty() {
        let k = kit(1, json!({"product": ["Backend"]}));
        let a = answers("Backend", "Beginner", &["Python"]);
        assert_eq!(score(&k, Some(&a)), PRODUCT_WEIGHT);
    }

    #[test]
    fn ranking_drops_low_scores_keeps_ties_stable_and_caps_at_three() {
        let kits = vec![
            // 20: product miss, level hit
            kit(1, json!({"experience": ["Beginner"]})),
            // 45
            kit(2, json!({"product": ["Backend"], "experience": ["Beginner"]})),
            // 45
            kit(3, json!({"product": ["Backend"], "experience": ["Beginner"]})),
            // 60
            kit(4, json!({"product": ["Backend"], "experience": ["Beginner"], "timeline": ["MVP (Weeks)"]})),
            // 25
            kit(5, json!({"product": ["Backend"]})),
        ];
        let a = answers("Backend", "Beginner", &[]);
        let recs = recommend(&kits, Some(&a));
        let ids: Vec<u32> = recs.iter().map(|r| r.kit).collect();
        assert_eq!(ids, vec![4, 2, 3]);
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(recs.iter().all(|r| r.score > MIN_RECOMMEND_SCORE));
        assert_eq!(recs[0].why, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn no_answers_means_no_recommendations() {
        let kits = vec![kit(1, json!({"product": ["Backend"]}))];
        assert!(recommend(&kits, None).is_empty());
    }
}
