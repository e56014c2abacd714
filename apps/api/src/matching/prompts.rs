// Matching prompt text. The roster is inserted between MATCH_RULES and
// MATCH_REMINDER by `request::build_match_prompt`.

pub const MATCH_SYSTEM: &str = "\
You are a matching algorithm that must match ALL possible pairs and assign unique, \
light pastel colors (#RRGGBB where RR,GG,BB range from 99 to FF) to each match. \
Ensure colors are light enough for black text to be readable.";

pub const MATCH_RULES: &str = "\
You are a matching algorithm. Your task is to match ALL students with mentors based on their sport and descriptions.

IMPORTANT RULES:
1. EVERY student must be matched with a mentor if there is a mentor available for their sport
2. EVERY mentor must be matched with a student if there is a student available for their sport
3. The sport MUST be exactly the same for a match to occur
4. Multiple mentors of the same sport should ALL be matched with students of that sport
5. Multiple students of the same sport should ALL be matched with mentors of that sport
6. If there are more students than mentors for a sport, mentors can be matched with multiple students
7. If there are more mentors than students for a sport, students can be matched with multiple mentors
8. Only leave someone unmatched if there is absolutely no available partner for their sport

COLOR RULES:
- Use ONLY light pastel colors that black text will be clearly readable on
- Each match must have a UNIQUE color, never repeat colors
- Use colors in this format: #RRGGBB where each pair ranges from 99 to FF
- Examples of good colors: #FFE4E1 (light pink), #E6F3FF (light blue), #F0FFF0 (light green), #FFF0F5 (lavender)
- Never use colors darker than #999999

Respond in exactly this format, one match per line:
Student: [Student Name], Mentor: [Mentor Name], Color: #[6-digit hex color]";

pub const MATCH_REMINDER: &str = "\
Remember:
1. EVERYONE with the same sport must be matched
2. Each match must have a unique, light pastel color
3. All colors must be light enough for black text to be readable
4. Never repeat colors between matches";
