//! Mock Data Fixtures
//!
//! Static seed data standing in for backend responses, plus a
//! deterministic comment-feed generator. Same inputs always produce
//! the same feed, so repeated page fetches slice a stable sequence.

use std::sync::OnceLock;

use crate::models::{avatar_initials, BlogPost, Comment, MembershipPlan, Product, Reply, WorkoutPlan};

/// Length of the generated comment feed per post
pub const COMMENT_FEED_LEN: usize = 25;

static BLOG_POSTS: OnceLock<Vec<BlogPost>> = OnceLock::new();
static WORKOUT_PLANS: OnceLock<Vec<WorkoutPlan>> = OnceLock::new();
static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();
static MEMBERSHIP_PLANS: OnceLock<Vec<MembershipPlan>> = OnceLock::new();

pub fn blog_posts() -> &'static [BlogPost] {
    BLOG_POSTS.get_or_init(build_blog_posts)
}

pub fn workout_plans() -> &'static [WorkoutPlan] {
    WORKOUT_PLANS.get_or_init(build_workout_plans)
}

pub fn products() -> &'static [Product] {
    PRODUCTS.get_or_init(build_products)
}

pub fn membership_plans() -> &'static [MembershipPlan] {
    MEMBERSHIP_PLANS.get_or_init(build_membership_plans)
}

fn post(
    id: u32,
    title: &str,
    excerpt: &str,
    content: &str,
    category: &str,
    tags: &[&str],
    author: &str,
    date: &str,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: author.to_string(),
        date: date.to_string(),
    }
}

fn build_blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "Five Compound Lifts That Build Real Strength",
            "Squat, deadlift, press: the movements that pay rent. How to program them without burning out.",
            "Most lifters chase variety too early. The fastest road to a stronger body is boring: a handful of compound lifts, done often, with small weekly jumps.\n\n## The big five\n\n- Back squat\n- Deadlift\n- Bench press\n- Overhead press\n- Barbell row\n\nRun them across three sessions a week. Add weight when all prescribed reps move well, and *only* then.\n\n## When to deload\n\nIf bar speed drops two sessions in a row, take 10% off and rebuild. Progress is a staircase, not a ramp.",
            "Training",
            &["strength", "barbell", "programming"],
            "Marcus Webb",
            "Mar 14, 2025",
        ),
        post(
            2,
            "Protein Myths Your Gym Buddy Still Believes",
            "No, 30 grams is not a hard ceiling per meal. What the research actually says about timing and totals.",
            "Protein advice gets passed around the gym floor like folklore. Three claims worth retiring:\n\n1. **\"You can only absorb 30 g per meal.\"** Absorption is not the bottleneck; daily total is.\n2. **\"The anabolic window slams shut in 30 minutes.\"** It is hours wide on any normal schedule.\n3. **\"Plant protein can't build muscle.\"** It can. Eat slightly more of it and vary sources.\n\nAim for roughly 1.6–2.2 g per kilo of bodyweight and stop stressing the stopwatch.",
            "Nutrition",
            &["protein", "nutrition", "myths"],
            "Dana Okafor",
            "Mar 8, 2025",
        ),
        post(
            3,
            "Why Your Rest Day Is a Training Day",
            "Adaptation happens between sessions. Treat recovery with the same intent you bring to the bar.",
            "You do not get stronger lifting. You get stronger recovering from lifting.\n\n## Non-negotiables\n\n- Seven-plus hours of sleep, most nights\n- A real meal within a few hours of training\n- Two full rest days a week for most lifters\n\n## Active recovery that works\n\nEasy cycling, long walks, mobility circuits. Keep the heart rate conversational. If you need a tracker to prove it was easy, it wasn't.",
            "Recovery",
            &["recovery", "sleep", "rest"],
            "Priya Nair",
            "Feb 27, 2025",
        ),
        post(
            4,
            "The First Six Weeks: A Beginner's Field Guide",
            "Walking into a gym with no plan is how most people quit. Here is the plan.",
            "Week one is not about training. It is about showing up enough times that showing up stops being a decision.\n\n## Weeks 1–2\n\nLearn the machines, find your starting weights, leave wanting more.\n\n## Weeks 3–4\n\nMove to a fixed full-body routine, three days a week. Write everything down.\n\n## Weeks 5–6\n\nAdd a little weight each session. By now the habit is carrying you, not willpower.",
            "Training",
            &["beginner", "habits", "full-body"],
            "Marcus Webb",
            "Feb 18, 2025",
        ),
        post(
            5,
            "Fueling the Morning Session",
            "Training fasted isn't a badge of honor. Simple pre-dawn fueling that won't upset your stomach.",
            "If you train at 6 a.m., dinner is doing most of your fueling. What you add on top should be small and fast:\n\n- A banana and a glass of milk\n- Toast with honey\n- Half a bowl of oats, made the night before\n\nSave the big breakfast for afterwards. Caffeine 30 minutes out if you use it, and water before anything else.",
            "Nutrition",
            &["breakfast", "pre-workout", "energy"],
            "Dana Okafor",
            "Feb 9, 2025",
        ),
        post(
            6,
            "Training Through a Busy Season Without Losing Ground",
            "Two short sessions a week will hold your strength for months. The math of maintenance.",
            "Life gets loud: deadlines, newborns, travel. The good news is that maintaining strength costs a fraction of building it.\n\n## The maintenance dose\n\nResearch keeps landing on the same answer: about one third of your building volume, at the same intensity, holds what you have.\n\nTwo 30-minute sessions covering squat, push, pull. That's it. When the season passes, you restart from the plateau, not the basement.",
            "Mindset",
            &["consistency", "maintenance", "time"],
            "Priya Nair",
            "Jan 30, 2025",
        ),
    ]
}

fn plan(
    id: u32,
    title: &str,
    description: &str,
    level: &str,
    duration_weeks: u32,
    sessions_per_week: u32,
    features: &[&str],
) -> WorkoutPlan {
    WorkoutPlan {
        id,
        title: title.to_string(),
        description: description.to_string(),
        level: level.to_string(),
        duration_weeks,
        sessions_per_week,
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn build_workout_plans() -> Vec<WorkoutPlan> {
    vec![
        plan(
            1,
            "Foundation",
            "Full-body machine and dumbbell circuits that teach the basic movement patterns.",
            "Beginner",
            6,
            3,
            &["guided video for every exercise", "mobility warm-ups", "progress check-ins"],
        ),
        plan(
            2,
            "Barbell Base",
            "A linear-progression barbell program built around the five big lifts.",
            "Beginner",
            12,
            3,
            &["linear progression", "technique library", "deload weeks built in"],
        ),
        plan(
            3,
            "Lean Engine",
            "Conditioning-first plan mixing intervals, sled work, and circuit strength.",
            "Intermediate",
            8,
            4,
            &["heart-rate zone targets", "low-impact options", "weekly benchmark workout"],
        ),
        plan(
            4,
            "Hypertrophy Block",
            "Upper/lower body-part split with controlled volume ramps for muscle growth.",
            "Intermediate",
            10,
            4,
            &["volume tracking", "exercise swaps per equipment", "pump finishers"],
        ),
        plan(
            5,
            "Strength Peak",
            "Periodized squat, bench, and deadlift cycle ending in a test week.",
            "Advanced",
            12,
            4,
            &["percentage-based loading", "openers and max-out protocol", "video form review"],
        ),
        plan(
            6,
            "Hybrid Athlete",
            "Concurrent strength and endurance programming for runners who lift.",
            "Advanced",
            16,
            5,
            &["interference management", "race-week taper", "dual progress dashboards"],
        ),
    ]
}

fn product(id: u32, name: &str, description: &str, price_cents: u32, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        category: category.to_string(),
    }
}

fn build_products() -> Vec<Product> {
    vec![
        product(1, "PulseFit Training Tee", "Sweat-wicking tee with the club crest.", 2800, "Apparel"),
        product(2, "Heavy Knurl Lifting Belt", "10 mm leather belt, single prong.", 8900, "Equipment"),
        product(3, "Whey Isolate, Vanilla", "25 g protein per scoop, 30 servings.", 4200, "Supplements"),
        product(4, "Club Hoodie", "Heavyweight fleece for cold warm-ups.", 6400, "Apparel"),
        product(5, "Speed Rope Pro", "Ball-bearing rope with adjustable cable.", 2400, "Equipment"),
        product(6, "Creatine Monohydrate", "Micronized, unflavored, 60 servings.", 2600, "Supplements"),
    ]
}

fn build_membership_plans() -> Vec<MembershipPlan> {
    let tier = |id: u32, name: &str, price_cents: u32, perks: &[&str], featured: bool| MembershipPlan {
        id,
        name: name.to_string(),
        price_cents,
        period: "month".to_string(),
        perks: perks.iter().map(|p| p.to_string()).collect(),
        featured,
    };
    vec![
        tier(1, "Basic", 1900, &["all workout plans", "community access"], false),
        tier(
            2,
            "Pro",
            3900,
            &["everything in Basic", "nutrition guides", "monthly form review"],
            true,
        ),
        tier(
            3,
            "Elite",
            7900,
            &["everything in Pro", "1-on-1 coaching call", "early access to programs"],
            false,
        ),
    ]
}

// ========================
// Comment Feed Generator
// ========================

const COMMENT_AUTHORS: &[&str] = &[
    "Sarah Mitchell",
    "James Okonkwo",
    "Lena Fischer",
    "Tom Alvarez",
    "Grace Park",
    "Dev Patel",
    "Maria Santos",
    "Chris Donnelly",
    "Aisha Bello",
    "Pete Lindgren",
];

const COMMENT_BODIES: &[&str] = &[
    "This is exactly what I needed to read this week. Saving it.",
    "Tried this approach for a month and my squat finally moved again.",
    "Not sure I agree with the volume recommendation, but the logic is solid.",
    "Great write-up. Any advice for people training in a home gym?",
    "I sent this to my training partner. We argue about this constantly.",
    "The deload advice alone was worth it. I always wait too long.",
    "Been coaching for ten years and this matches what I see on the floor.",
    "Would love a follow-up that covers the over-40 crowd.",
    "Printed this and stuck it on the fridge. No more excuses.",
    "Simple and honest. Rare combination in fitness writing.",
    "This cleared up something my old program never explained.",
    "Halfway through week three of doing exactly this. It works.",
];

const REPLY_BODIES: &[&str] = &[
    "Agreed, same experience here.",
    "Could you share what your weekly split looks like?",
    "This helped me too, thanks for spelling it out.",
    "I'd add: film your sets. You'll spot the issue instantly.",
    "Careful with that if your sleep is bad though.",
    "Seconding this question!",
    "That matches what my coach keeps telling me.",
    "Took me way too long to learn this one.",
];

const COMMENT_DATES: &[&str] = &[
    "2 hours ago",
    "5 hours ago",
    "Yesterday",
    "2 days ago",
    "3 days ago",
    "Last week",
    "2 weeks ago",
];

/// Small linear congruential generator so feeds are reproducible
struct SeedRng(u32);

impl SeedRng {
    fn new(seed: u32) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9).wrapping_add(1))
    }

    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0
    }

    fn pick(&mut self, bound: usize) -> usize {
        (self.next() >> 8) as usize % bound
    }
}

/// Generate the full comment feed for a post. Deterministic per post
/// id, so page fetches at different offsets slice the same sequence.
pub fn seed_comments(post_id: u32) -> Vec<Comment> {
    let mut rng = SeedRng::new(post_id);
    (0..COMMENT_FEED_LEN as u32)
        .map(|i| {
            let author = COMMENT_AUTHORS[rng.pick(COMMENT_AUTHORS.len())];
            let reply_count = rng.pick(4);
            let mut replies = Vec::with_capacity(reply_count);
            for j in 0..reply_count as u32 {
                let reply_author = COMMENT_AUTHORS[rng.pick(COMMENT_AUTHORS.len())];
                // Later replies sometimes answer an earlier reply rather
                // than the comment itself
                let reply_to = replies
                    .last()
                    .filter(|_| rng.pick(2) == 0)
                    .map(|prev: &Reply| prev.author.clone());
                replies.push(Reply {
                    id: (i + 1) * 100 + j,
                    author: reply_author.to_string(),
                    date: COMMENT_DATES[rng.pick(COMMENT_DATES.len())].to_string(),
                    content: REPLY_BODIES[rng.pick(REPLY_BODIES.len())].to_string(),
                    likes: rng.pick(15) as u32,
                    reply_to,
                });
            }
            Comment {
                id: i + 1,
                author: author.to_string(),
                initials: avatar_initials(author),
                date: COMMENT_DATES[rng.pick(COMMENT_DATES.len())].to_string(),
                content: COMMENT_BODIES[rng.pick(COMMENT_BODIES.len())].to_string(),
                likes: rng.pick(40) as u32,
                replies,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_length_and_determinism() {
        let first = seed_comments(1);
        assert_eq!(first.len(), COMMENT_FEED_LEN);
        assert_eq!(first, seed_comments(1));
        // Different posts get different feeds
        assert_ne!(first, seed_comments(2));
    }

    #[test]
    fn test_reply_back_references_point_at_earlier_replies() {
        for comment in seed_comments(3) {
            for (idx, reply) in comment.replies.iter().enumerate() {
                if let Some(target) = &reply.reply_to {
                    assert!(comment.replies[..idx].iter().any(|r| &r.author == target));
                }
            }
        }
    }

    #[test]
    fn test_fixture_counts() {
        assert_eq!(blog_posts().len(), 6);
        assert_eq!(workout_plans().len(), 6);
        assert_eq!(products().len(), 6);
        assert_eq!(membership_plans().len(), 3);
    }
}
