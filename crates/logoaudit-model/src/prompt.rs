//! Rubric prompt templates, one per contract version.
//!
//! Templates are parameterized only by the industry label. Each instructs the
//! model to emit a single JSON object keyed by the contract's category names,
//! so the prompt, validator, and report columns agree by construction.

use logoaudit_core::ContractVersion;

const PRODUCT_TEMPLATE: &str = r#"You are a Senior Product Designer auditing logo quality for the '{industry}' industry.

Evaluate this logo on these 8 PRODUCT DIMENSIONS (Score 1-5):

1. VARIETY (Distinctiveness): Is this logo unique or a template? 5 = Unique/Custom feel. 1 = Generic/Overused trope.
2. QUALITY (Aesthetic Fidelity): Are the assets premium? 5 = Sharp, professional vector feel. 1 = Glitchy, clip-art style.
3. INDUSTRY RELEVANCE (Semantic Fit): Does it fit '{industry}'? 5 = Perfect fit. 1 = Confusing/Wrong industry.
4. LAYOUT (Composition): Is the balance correct? 5 = Balanced, professional spacing. 1 = Elements touching, off-center.
5. FONT (Typography): Is the text readable and styled correctly? 5 = Legible, good pairing. 1 = Unreadable, clashing styles.
6. COLOR (Palette): Is the contrast and harmony good? 5 = Good contrast (WCAG). 1 = Low contrast, vibrating colors.
7. ICON (Symbolism): Is the icon itself good? 5 = Strong symbol. 1 = Weak/Unclear symbol or no symbol where needed.
8. CONTAINER (Shape/Badge integration): How well is the logo contained or bounded? If no visible container exists, judge the implied shape. 5 = Well integrated. 1 = Awkward bounding box.

OUTPUT JSON FORMAT (strictly enforce this structure):
{
  "variety": { "score": 1-5, "reason": "...", "suggested_fix": "SHORT actionable instruction" },
  "quality": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "industry_relevance": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "layout": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "font": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "color": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "icon": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "container": { "score": 1-5, "reason": "...", "suggested_fix": "..." }
}"#;

const PRODUCT_GATED_TEMPLATE: &str = r#"You are a Senior Product Designer auditing logo quality for the '{industry}' industry.

Evaluate on these 8 PRODUCT DIMENSIONS.

IMPORTANT: For 'Icon' and 'Container', check if they exist first. If they do not exist, return "score": null. DO NOT rate them as low quality.

1. VARIETY (Distinctiveness): Unique or a template? (5=Unique, 1=Generic).
2. QUALITY (Aesthetic Fidelity): Are the assets premium? (5=Sharp/Pro, 1=Glitchy/Clip-art).
3. INDUSTRY RELEVANCE (Semantic Fit): Does it fit '{industry}'? (5=Perfect fit, 1=Wrong industry).
4. LAYOUT (Composition): Is the balance correct? (5=Balanced, 1=Messy/Touching elements).
5. FONT (Typography): Readable and paired correctly for both name and tagline? (5=Great, 1=Unreadable/Tiny).
6. COLOR (Palette): Contrast and harmony? (5=Great, 1=Low contrast/Vibrating).
7. ICON (Symbolism): CHECK EXISTENCE: Is there a distinct icon graphic? IF NO ICON (wordmark only): return "score": null. Otherwise rate 1-5.
8. CONTAINER (Shape/Badge): CHECK EXISTENCE: Is there a visible container shape (circle, badge, shield, box)? IF NO CONTAINER: return "score": null. Otherwise rate integration 1-5.

OUTPUT JSON FORMAT:
{
  "variety": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "quality": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "industry_relevance": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "layout": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "font": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "color": { "score": 1-5, "reason": "...", "suggested_fix": "..." },
  "icon": { "score": 1-5 OR null, "reason": "...", "suggested_fix": "..." },
  "container": { "score": 1-5 OR null, "reason": "...", "suggested_fix": "..." }
}"#;

const BUG_HUNT_TEMPLATE: &str = r#"You are a QA Engineer for a Logo Design System. Your job is to FLAG BUGS.
Analyze this logo for the '{industry}' industry.

PROTOCOL:
1. Scan for the specific "Critical Bugs" listed below.
2. If ANY bug is found in a category, that Category Score is automatically 1.
3. If NO bugs are found, rate the design quality 2-5 (2=Boring, 5=Excellent).

=== BUG CHECKLIST (Use these exact tags) ===

1. LAYOUT
   - "Disproportionate_Sizing": Elements are comically large/small relative to each other.
   - "Off_Center": Visibly unaligned.
2. TEXT
   - "Text_Cutoff": Text exceeds the container or canvas edge (overflow).
   - "Text_Unreadable": Text is too small or illegible font.
   - "Bad_Ratio": Tagline is larger than Brand Name, or ratio is awkward.
3. COLOR
   - "Low_Contrast": Text blends into background.
   - "Theme_Mismatch": Colors clearly wrong for '{industry}'.
4. ICON
   - "Bad_Asset_Quality": Icon looks like a glitch, ugly clip-art, or pixelated.
   - "Icon_Too_Small": Icon is lost in the layout.
   - IF NO ICON: Return bugs: [] (empty), do not penalize.
5. CONTAINER
   - "Container_Cutoff": Shape exceeds the logo card.
   - "Container_Mismatch": Shape style clashes with industry.
   - IF NO CONTAINER: Return bugs: [] (empty).
6. COHESIVENESS (Style Matching)
   - "Style_Clash_Text": Font A and Font B clash.
   - "Style_Clash_Icon": Icon style does not match font style.
   - "Style_Clash_Container": Container style does not match content.

OUTPUT JSON FORMAT:
{
  "layout": { "score": 1-5, "bugs": ["Tag1", "Tag2"], "reason": "..." },
  "text": { "score": 1-5, "bugs": [], "reason": "..." },
  "color": { "score": 1-5, "bugs": [], "reason": "..." },
  "icon": { "score": 1-5, "bugs": [], "reason": "..." },
  "container": { "score": 1-5, "bugs": [], "reason": "..." },
  "cohesiveness": { "score": 1-5, "bugs": [], "reason": "..." }
}"#;

/// Builds the rubric prompt for one tile, interpolating the industry label.
#[must_use]
pub fn build_prompt(contract: ContractVersion, industry: &str) -> String {
    let template = match contract {
        ContractVersion::Product => PRODUCT_TEMPLATE,
        ContractVersion::ProductGated => PRODUCT_GATED_TEMPLATE,
        ContractVersion::BugHunt => BUG_HUNT_TEMPLATE,
    };
    template.replace("{industry}", industry)
}
