//! Advice composer: turns a request and its metrics into report text.
//!
//! Section order and wording are fixed. The only decisions are:
//! - report kind (fitness or nutrition)
//! - workout plan by goal (fitness)
//! - protein sources by dietary profile (nutrition)
//! - whether the allergy and health sections appear

use crate::metrics::Metrics;
use crate::number::{to_fixed_1, JsNumber};
use crate::{ConsultationRequest, ConsultationType, DietaryProfile, Goal};

/// Final consultation text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceReport(String);

impl AdviceReport {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AdviceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compose the report for the request's consultation type
pub fn compose(request: &ConsultationRequest, metrics: &Metrics) -> AdviceReport {
    let text = match request.kind {
        ConsultationType::Fitness => fitness_report(request, metrics),
        ConsultationType::Nutrition => nutrition_report(request, metrics),
    };
    AdviceReport(text)
}

/// Append-only text buffer with the report's line conventions
#[derive(Default)]
struct ReportWriter {
    out: String,
}

impl ReportWriter {
    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn bullets(&mut self, items: &[&str]) {
        for item in items {
            self.out.push_str("• ");
            self.line(item);
        }
    }

    /// Title line followed by bullets
    fn list(&mut self, title: &str, items: &[&str]) {
        self.line(title);
        self.bullets(items);
    }

    fn finish(self) -> String {
        self.out
    }
}

fn write_header(
    w: &mut ReportWriter,
    title: &str,
    request: &ConsultationRequest,
    metrics: &Metrics,
) {
    w.line(title);
    w.blank();
    w.line("📊 YOUR PROFILE");
    w.line(&format!(
        "Age: {} years | Weight: {}kg | Height: {}cm",
        request.age.raw, request.weight.raw, request.height.raw
    ));
    w.line(&format!(
        "BMI: {} | Daily Calorie Needs: {} kcal",
        to_fixed_1(metrics.bmi),
        JsNumber(metrics.tdee)
    ));
    w.blank();
    w.line(&format!("🎯 GOAL: {}", request.goal.heading()));
    w.blank();
}

// ============================================================================
// Fitness
// ============================================================================

struct WorkoutPlan {
    weekly_structure: [&'static str; 3],
    key_exercises: [&'static str; 4],
    /// Empty for the general plan
    targets: &'static [&'static str],
}

const WEIGHT_LOSS_PLAN: WorkoutPlan = WorkoutPlan {
    weekly_structure: [
        "4-5 days cardio (30-45 min moderate intensity)",
        "3 days strength training (full body circuits)",
        "2 days active recovery (walking, yoga)",
    ],
    key_exercises: [
        "HIIT sessions (intervals of high/low intensity)",
        "Compound movements (squats, lunges, push-ups)",
        "Core strengthening exercises",
        "Progressive cardio (running, cycling, swimming)",
    ],
    targets: &[
        "Target: 500-750 calorie deficit per day",
        "Aim for 0.5-1kg weight loss per week",
    ],
};

const MUSCLE_GAIN_PLAN: WorkoutPlan = WorkoutPlan {
    weekly_structure: [
        "4-5 days strength training (progressive overload)",
        "2-3 days light cardio (20 min for heart health)",
        "2 days complete rest",
    ],
    key_exercises: [
        "Compound lifts (deadlifts, squats, bench press)",
        "Progressive overload (increase weight weekly)",
        "8-12 reps per set, 3-4 sets per exercise",
        "Focus on major muscle groups",
    ],
    targets: &[
        "Target: 300-500 calorie surplus per day",
        "Aim for 0.25-0.5kg muscle gain per week",
    ],
};

const ENDURANCE_PLAN: WorkoutPlan = WorkoutPlan {
    weekly_structure: [
        "4-5 days aerobic training (45-60 min)",
        "2 days strength training (maintain muscle)",
        "1 day active recovery",
    ],
    key_exercises: [
        "Long-distance running/cycling",
        "Interval training for speed",
        "Core strength exercises",
        "Flexibility and mobility work",
    ],
    targets: &["Focus on gradually increasing distance/duration"],
};

const GENERAL_PLAN: WorkoutPlan = WorkoutPlan {
    weekly_structure: [
        "3-4 days moderate cardio (30 min)",
        "2-3 days strength training",
        "1-2 days rest or active recovery",
    ],
    key_exercises: [
        "Mix of cardio and strength training",
        "Bodyweight exercises (push-ups, squats)",
        "Walking or jogging",
        "Flexibility exercises",
    ],
    targets: &[],
};

const FITNESS_TIPS: &[&str] = &[
    "Warm up 5-10 min before workouts",
    "Cool down and stretch after exercise",
    "Stay hydrated (2-3L water daily)",
    "Get 7-9 hours of sleep per night",
    "Listen to your body and avoid overtraining",
];

const PROGRESSION: &[&str] = &[
    "Week 1-2: Build foundation and proper form",
    "Week 3-4: Increase intensity gradually",
    "Week 5+: Maintain consistency and track progress",
];

fn workout_plan(goal: &Goal) -> &'static WorkoutPlan {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS_PLAN,
        Goal::MuscleGain => &MUSCLE_GAIN_PLAN,
        Goal::Endurance => &ENDURANCE_PLAN,
        Goal::Maintenance | Goal::GeneralHealth | Goal::Unrecognized(_) => &GENERAL_PLAN,
    }
}

fn fitness_report(request: &ConsultationRequest, metrics: &Metrics) -> String {
    let mut w = ReportWriter::default();
    write_header(&mut w, "🏋️ PERSONALIZED FITNESS CONSULTATION", request, metrics);

    w.line("💪 RECOMMENDED WORKOUT PLAN:");
    w.blank();

    let plan = workout_plan(&request.goal);
    w.list("Weekly Structure:", &plan.weekly_structure);
    w.blank();
    w.list("Key Exercises:", &plan.key_exercises);
    if !plan.targets.is_empty() {
        w.blank();
        for target in plan.targets {
            w.line(target);
        }
    }

    w.blank();
    w.list("⚡ ADDITIONAL TIPS:", FITNESS_TIPS);

    if let Some(conditions) = &request.health_conditions {
        w.blank();
        w.line("⚠️ HEALTH CONSIDERATIONS:");
        w.line(&format!("You mentioned: {}", conditions));
        w.line("Please consult with a healthcare provider before starting");
        w.line("any new exercise program.");
    }

    w.blank();
    w.list("📈 PROGRESSION:", PROGRESSION);

    w.finish()
}

// ============================================================================
// Nutrition
// ============================================================================

const PLANT_PROTEINS: &[&str] = &[
    "Legumes (lentils, chickpeas, black beans)",
    "Tofu and tempeh",
    "Quinoa and other whole grains",
    "Nuts and seeds",
];

const VEGETARIAN_EXTRA_PROTEIN: &str = "Greek yogurt and eggs";

const MIXED_PROTEINS: &[&str] = &[
    "Lean meats (chicken breast, turkey)",
    "Fish (salmon, tuna, cod)",
    "Eggs and egg whites",
    "Greek yogurt and cottage cheese",
    "Legumes and beans",
];

const HEALTHY_CARBS: &[&str] = &[
    "Oatmeal and whole grain bread",
    "Brown rice and quinoa",
    "Sweet potatoes",
    "Fruits (berries, apples, bananas)",
    "Vegetables (leafy greens, broccoli)",
];

const HEALTHY_FATS: &[&str] = &[
    "Avocados",
    "Nuts (almonds, walnuts)",
    "Olive oil and coconut oil",
    "Fatty fish (salmon, mackerel)",
    "Chia and flax seeds",
];

const HYDRATION: &[&str] = &[
    "Drink at least 2-3 liters of water daily",
    "More if exercising or in hot weather",
    "Limit sugary drinks and alcohol",
];

const TIMING_TIPS: &[&str] = &[
    "Eat protein within 2 hours post-workout",
    "Don't skip breakfast to boost metabolism",
    "Eat smaller, frequent meals for stable energy",
    "Avoid heavy meals 2-3 hours before bed",
];

const FOODS_TO_LIMIT: &[&str] = &[
    "Processed foods and refined sugars",
    "Trans fats and excessive saturated fats",
    "High-sodium foods",
    "Excessive caffeine and alcohol",
];

const BREAKFAST_IDEAS: &[&str] = &[
    "Oatmeal with berries and protein powder",
    "Greek yogurt with granola and fruit",
    "Whole grain toast with avocado and eggs",
];

const LUNCH_IDEAS: &[&str] = &[
    "Grilled chicken salad with olive oil dressing",
    "Quinoa bowl with vegetables and chickpeas",
    "Whole grain wrap with lean protein and veggies",
];

const DINNER_IDEAS: &[&str] = &[
    "Baked salmon with sweet potato and broccoli",
    "Stir-fry with lean protein and brown rice",
    "Grilled chicken with quinoa and mixed vegetables",
];

fn write_protein_sources(w: &mut ReportWriter, profile: DietaryProfile) {
    w.line("Protein Sources:");
    match profile {
        DietaryProfile::Vegan => w.bullets(PLANT_PROTEINS),
        DietaryProfile::Vegetarian => {
            w.bullets(PLANT_PROTEINS);
            w.bullets(&[VEGETARIAN_EXTRA_PROTEIN]);
        }
        DietaryProfile::Omnivore => w.bullets(MIXED_PROTEINS),
    }
}

fn nutrition_report(request: &ConsultationRequest, metrics: &Metrics) -> String {
    let mut w = ReportWriter::default();
    write_header(&mut w, "🥗 PERSONALIZED NUTRITION CONSULTATION", request, metrics);

    w.line("🍽️ DAILY NUTRITION TARGETS:");
    w.line(&format!("Calories: {} kcal", JsNumber(metrics.target_calories)));
    w.line(&format!(
        "Protein: {}g ({}g per kg body weight)",
        JsNumber(metrics.protein_grams),
        JsNumber(metrics.protein_per_kg_display)
    ));
    w.line(&format!("Carbohydrates: {}g", JsNumber(metrics.carb_grams)));
    w.line(&format!("Fats: {}g", JsNumber(metrics.fat_grams)));
    w.blank();

    let meals = metrics.meal_split();
    w.line("🍎 MEAL STRUCTURE:");
    for (meal, kcal) in [
        ("Breakfast", meals.breakfast),
        ("Lunch", meals.lunch),
        ("Dinner", meals.dinner),
        ("Snacks", meals.snacks),
    ] {
        w.bullets(&[format!("{}: {} kcal", meal, JsNumber(kcal)).as_str()]);
    }
    w.blank();

    w.line("🥙 RECOMMENDED FOODS:");
    w.blank();
    write_protein_sources(&mut w, request.dietary_profile());
    w.blank();
    w.list("Healthy Carbohydrates:", HEALTHY_CARBS);
    w.blank();
    w.list("Healthy Fats:", HEALTHY_FATS);
    w.blank();

    if let Some(allergies) = &request.allergies {
        w.line("⚠️ ALLERGIES TO AVOID:");
        w.line(allergies);
        w.line("Make sure to read labels and find suitable alternatives");
        w.blank();
    }

    w.list("💧 HYDRATION:", HYDRATION);
    w.blank();
    w.list("⚡ TIMING TIPS:", TIMING_TIPS);
    w.blank();
    w.list("🚫 FOODS TO LIMIT:", FOODS_TO_LIMIT);
    w.blank();

    w.line("📋 SAMPLE MEAL IDEAS:");
    w.blank();
    w.list("Breakfast:", BREAKFAST_IDEAS);
    w.blank();
    w.list("Lunch:", LUNCH_IDEAS);
    w.blank();
    w.list("Dinner:", DINNER_IDEAS);
    w.blank();

    if let Some(conditions) = &request.health_conditions {
        w.line("⚠️ HEALTH CONSIDERATIONS:");
        w.line(&format!("You mentioned: {}", conditions));
        w.line("Please consult with a registered dietitian or doctor");
        w.line("for personalized medical nutrition therapy.");
    }

    w.finish()
}
