//! Built-in presentation content.

use super::{Block, Bullet, Practice, Slide, Topic};

pub fn builtin_topics() -> Vec<(Topic, Vec<Slide>)> {
    vec![
        (Topic::Intro, vec![intro()]),
        (Topic::TypeScript, typescript()),
        (Topic::Accessibility, accessibility()),
        (Topic::RxJs, rxjs()),
    ]
}

fn practices(items: &[(&'static str, &'static str)]) -> Block {
    Block::Practices {
        items: items
            .iter()
            .map(|&(title, description)| Practice { title, description })
            .collect(),
    }
}

fn section(title: &'static str) -> Block {
    Block::Section { title }
}

fn code(language: &'static str, source: &'static str) -> Block {
    Block::Code { language, source }
}

fn bullets(items: &[&'static str]) -> Block {
    Block::Bullets {
        items: items
            .iter()
            .map(|&text| Bullet { label: None, text })
            .collect(),
    }
}

fn labelled(items: &[(&'static str, &'static str)]) -> Block {
    Block::Bullets {
        items: items
            .iter()
            .map(|&(label, text)| Bullet {
                label: Some(label),
                text,
            })
            .collect(),
    }
}

fn intro() -> Slide {
    Slide {
        id: "intro",
        badge: Some("Technical Presentation"),
        title: "Modern Web Development",
        subtitle: "Best practices for building robust, accessible, and reactive web applications",
        blocks: Vec::new(),
    }
}

fn typescript() -> Vec<Slide> {
    vec![
        Slide {
            id: "ts-intro",
            badge: Some("Part 1"),
            title: "TypeScript Best Practices",
            subtitle: "Writing clean, type-safe code that enhances developer experience and prevents bugs",
            blocks: vec![practices(&[
                (
                    "Type Safety",
                    "Leverage TypeScript's static type system to catch errors during development rather than at runtime.",
                ),
                (
                    "Interface Segregation",
                    "Create small, focused interfaces rather than large monolithic ones.",
                ),
                (
                    "Strict Mode",
                    "Enable strict mode to ensure type safety throughout your codebase.",
                ),
                (
                    "Discriminated Unions",
                    "Use discriminated unions to handle complex type relationships.",
                ),
            ])],
        },
        Slide {
            id: "ts-types",
            badge: None,
            title: "Proper Type Definitions",
            subtitle: "Define proper types to enhance code readability and prevent errors",
            blocks: vec![
                section("Use Specific Types"),
                code(
                    "ts",
                    r#"// Bad
function processUser(user: any): any {
  return user.name;
}

// Good
interface User {
  id: number;
  name: string;
  email: string;
}

function processUser(user: User): string {
  return user.name;
}"#,
                ),
                section("Discriminated Unions"),
                code(
                    "ts",
                    r#"type ApiState =
  | { status: 'success'; data: User[] }
  | { status: 'loading' }
  | { status: 'error'; error: string };

function renderState(state: ApiState) {
  switch (state.status) {
    case 'success':
      return renderUsers(state.data);
    case 'loading':
      return renderLoader();
    case 'error':
      return renderError(state.error);
  }
}"#,
                ),
            ],
        },
        Slide {
            id: "ts-utility-types",
            badge: None,
            title: "Utility Types",
            subtitle: "Leverage TypeScript's built-in utility types for common type transformations",
            blocks: vec![
                section("Common Utility Types"),
                code(
                    "ts",
                    r#"interface User {
  id: number;
  name: string;
  email: string;
  createdAt: Date;
}

type PartialUser = Partial<User>;
type RequiredUser = Required<User>;
type UserBasicInfo = Pick<User, 'name' | 'email'>;
type UserWithoutMetadata = Omit<User, 'createdAt'>;
type UserKeys = keyof User;"#,
                ),
                section("Custom Utility Types"),
                code(
                    "ts",
                    r#"type MaybeUser = User | null | undefined;
type DefiniteUser = NonNullable<MaybeUser>;

type GetUserReturnType = ReturnType<typeof getUser>;

type DeepReadonly<T> = {
  readonly [P in keyof T]: DeepReadonly<T[P]>;
};"#,
                ),
            ],
        },
        Slide {
            id: "ts-best-practices",
            badge: None,
            title: "TypeScript Best Practices",
            subtitle: "Strategies for writing maintainable TypeScript code",
            blocks: vec![
                section("Enable Strict Mode"),
                code(
                    "json",
                    r#"{
  "compilerOptions": {
    "strict": true,
    "noImplicitAny": true,
    "strictNullChecks": true,
    "strictFunctionTypes": true,
    "strictBindCallApply": true
  }
}"#,
                ),
                section("Use Type Assertions Sparingly"),
                code(
                    "ts",
                    r#"// Bad
const user = getUser() as User;

// Better: use type guards
function isUser(obj: any): obj is User {
  return typeof obj === 'object' && obj !== null
    && 'id' in obj && 'name' in obj;
}

const data = getUser();
if (isUser(data)) {
  console.log(data.name);
}"#,
                ),
            ],
        },
        Slide {
            id: "ts-advanced",
            badge: None,
            title: "Advanced TypeScript Techniques",
            subtitle: "Powerful TypeScript features for complex use cases",
            blocks: vec![
                section("Generic Constraints"),
                code(
                    "ts",
                    r#"interface HasId {
  id: number | string;
}

function findById<T extends HasId>(items: T[], id: number | string): T | undefined {
  return items.find(item => item.id === id);
}

const user = findById(users, 1); // User | undefined"#,
                ),
                section("Mapped Types"),
                code(
                    "ts",
                    r#"type ReadonlyUser = {
  readonly [K in keyof User]: User[K];
};

type NullableUser = {
  [K in keyof User]: User[K] | null;
};"#,
                ),
            ],
        },
    ]
}

fn accessibility() -> Vec<Slide> {
    vec![
        Slide {
            id: "a11y-intro",
            badge: Some("Part 2"),
            title: "Web Accessibility",
            subtitle: "Creating inclusive experiences that work for everyone, regardless of ability",
            blocks: vec![practices(&[
                (
                    "Perceivable",
                    "Information and user interface components must be presentable to users in ways they can perceive.",
                ),
                (
                    "Operable",
                    "User interface components and navigation must be operable by all users.",
                ),
                (
                    "Understandable",
                    "Information and the operation of the user interface must be understandable.",
                ),
                (
                    "Robust",
                    "Content must be robust enough to be interpreted reliably by a wide variety of user agents, including assistive technologies.",
                ),
            ])],
        },
        Slide {
            id: "a11y-semantic-html",
            badge: None,
            title: "Semantic HTML",
            subtitle: "Using the right HTML elements for their intended purpose",
            blocks: vec![
                section("Non-Semantic vs. Semantic HTML"),
                code(
                    "html",
                    r#"<!-- Poor: non-semantic -->
<div class="header">
  <div class="title">My Website</div>
  <div class="nav-item">Home</div>
</div>

<!-- Good: semantic -->
<header>
  <h1>My Website</h1>
  <nav>
    <ul>
      <li><a href="/">Home</a></li>
      <li><a href="/about">About</a></li>
    </ul>
  </nav>
</header>"#,
                ),
                section("Benefits of Semantic HTML"),
                bullets(&[
                    "Screen readers can interpret the page structure more effectively",
                    "Keyboard navigation is improved",
                    "Search engines understand content better",
                    "Code is more maintainable",
                    "User agents can provide appropriate controls",
                ]),
            ],
        },
        Slide {
            id: "a11y-aria",
            badge: None,
            title: "ARIA Attributes",
            subtitle: "Accessible Rich Internet Applications (ARIA) attributes enhance accessibility when native HTML is not sufficient",
            blocks: vec![
                section("ARIA Landmark Roles"),
                code(
                    "html",
                    r#"<div role="banner">Site Header</div>
<div role="navigation">...</div>
<div role="main">...</div>

<!-- Prefer semantic elements -->
<header>Site Header</header>
<nav>...</nav>
<main>...</main>"#,
                ),
                section("ARIA States and Properties"),
                code(
                    "html",
                    r#"<button aria-pressed="false">Toggle Feature</button>

<input type="text" aria-invalid="true" aria-errormessage="name-error" />
<div id="name-error" role="alert">Please enter a valid name</div>

<div aria-hidden="true">Hidden from assistive technologies</div>"#,
                ),
            ],
        },
        Slide {
            id: "a11y-keyboard",
            badge: None,
            title: "Keyboard Accessibility",
            subtitle: "Ensuring all interactions can be accomplished with a keyboard alone",
            blocks: vec![
                section("Focus Management"),
                code(
                    "js",
                    r#"function openModal() {
  modal.style.display = 'block';
  previousFocus = document.activeElement;
  const focusable = modal.querySelectorAll(
    'button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])'
  );
  focusable[0].focus();
}

function closeModal() {
  modal.style.display = 'none';
  previousFocus.focus();
}"#,
                ),
                section("Focus Trap"),
                code(
                    "js",
                    r#"const handleKeyDown = (e) => {
  if (e.key === 'Tab') {
    if (e.shiftKey && document.activeElement === first) {
      last.focus();
      e.preventDefault();
    } else if (!e.shiftKey && document.activeElement === last) {
      first.focus();
      e.preventDefault();
    }
  } else if (e.key === 'Escape') {
    onClose();
  }
};"#,
                ),
            ],
        },
        Slide {
            id: "a11y-testing",
            badge: None,
            title: "Accessibility Testing",
            subtitle: "Tools and techniques to verify your website's accessibility",
            blocks: vec![
                section("Automated Testing Tools"),
                labelled(&[
                    ("Lighthouse", "Built into Chrome DevTools, provides accessibility audits"),
                    ("axe-core", "JavaScript library for automated accessibility testing"),
                    ("WAVE", "Web Accessibility Evaluation Tool by WebAIM"),
                    (
                        "eslint-plugin-jsx-a11y",
                        "Static analysis for accessibility issues in JSX",
                    ),
                ]),
                section("Manual Testing Techniques"),
                labelled(&[
                    (
                        "Keyboard Navigation Testing",
                        "Verify all functionality is accessible without a mouse",
                    ),
                    ("Screen Reader Testing", "Test with NVDA, JAWS, or VoiceOver"),
                    (
                        "Color Contrast Checking",
                        "Ensure text meets WCAG contrast requirements",
                    ),
                    ("Zoom Testing", "Verify content is usable at 200% zoom"),
                    (
                        "User Testing",
                        "Include people with disabilities in your testing process",
                    ),
                ]),
            ],
        },
    ]
}

fn rxjs() -> Vec<Slide> {
    vec![
        Slide {
            id: "rxjs-intro",
            badge: Some("Part 3"),
            title: "RxJS",
            subtitle: "Reactive Extensions for JavaScript: A library for reactive programming using Observables",
            blocks: vec![practices(&[
                (
                    "Observables",
                    "Represent a stream of values over time, from mouse events to HTTP requests.",
                ),
                (
                    "Operators",
                    "Functions that build new Observables based on the current Observable.",
                ),
                (
                    "Subjects",
                    "Special type of Observable that allows values to be multicasted to many Observers.",
                ),
                (
                    "Schedulers",
                    "Control when a subscription starts and when notifications are delivered.",
                ),
            ])],
        },
        Slide {
            id: "rxjs-observables",
            badge: None,
            title: "Observables",
            subtitle: "The foundation of RxJS: Observables represent a stream of values or events over time",
            blocks: vec![
                section("Creating Observables"),
                code(
                    "ts",
                    r#"import { Observable, of, from, interval, fromEvent } from 'rxjs';

const manual$ = new Observable<number>(subscriber => {
  subscriber.next(1);
  subscriber.next(2);
  subscriber.complete();
});

const ofValues$ = of(1, 2, 3, 4, 5);
const fromArray$ = from([1, 2, 3, 4, 5]);
const interval$ = interval(1000);
const clicks$ = fromEvent(document, 'click');"#,
                ),
                section("Subscribing to Observables"),
                code(
                    "ts",
                    r#"const subscription = interval$.subscribe({
  next: value => console.log('Next:', value),
  error: err => console.error('Error:', err),
  complete: () => console.log('Complete!')
});

// Unsubscribe to prevent memory leaks
setTimeout(() => subscription.unsubscribe(), 5000);"#,
                ),
            ],
        },
        Slide {
            id: "rxjs-operators",
            badge: None,
            title: "Operators",
            subtitle: "Functions that transform, filter, combine, or manipulate observables",
            blocks: vec![
                section("Pipeable Operators"),
                code(
                    "ts",
                    r#"const numbers$ = of(1, 2, 3, 4, 5);

const evenSquares$ = numbers$.pipe(
  map(x => x * x),
  filter(x => x % 2 === 0)
); // emits 4, 16

const first3$ = interval(1000).pipe(take(3)); // 0, 1, 2"#,
                ),
                section("Common Operators by Category"),
                labelled(&[
                    ("Transformation", "map, switchMap, mergeMap, concatMap, scan"),
                    (
                        "Filtering",
                        "filter, take, skip, takeUntil, distinct, distinctUntilChanged",
                    ),
                    ("Combination", "combineLatest, merge, concat, zip, forkJoin"),
                    ("Error Handling", "catchError, retry, retryWhen"),
                    ("Utility", "tap, delay, timeout, toArray"),
                    ("Conditional", "takeWhile, skipWhile, iif"),
                    ("Multicasting", "share, shareReplay, publish"),
                ]),
                code(
                    "ts",
                    r#"// Type-ahead search
const search$ = fromEvent(input, 'input').pipe(
  map(event => (event.target as HTMLInputElement).value),
  filter(text => text.length > 2),
  debounceTime(300),
  distinctUntilChanged(),
  switchMap(term => fetchSearchResults(term))
);"#,
                ),
            ],
        },
        Slide {
            id: "rxjs-subjects",
            badge: None,
            title: "Subjects",
            subtitle: "Special types of Observables that act as both Observer and Observable",
            blocks: vec![
                section("Types of Subjects"),
                code(
                    "ts",
                    r#"const subject = new Subject<number>();
subject.subscribe(v => console.log('A:', v));
subject.next(1); // A: 1

const behavior = new BehaviorSubject<number>(0);
behavior.subscribe(v => console.log('B:', v)); // B: 0
behavior.next(5); // B: 5"#,
                ),
                section("More Subject Types"),
                code(
                    "ts",
                    r#"const replay = new ReplaySubject<number>(2);
replay.next(1);
replay.next(2);
replay.next(3);
replay.subscribe(v => console.log('Replay:', v)); // 2, 3

const last = new AsyncSubject<number>();
last.subscribe(v => console.log('Async:', v));
last.next(1);
last.next(2);
last.complete(); // Async: 2"#,
                ),
            ],
        },
        Slide {
            id: "rxjs-real-world",
            badge: None,
            title: "Real-world Examples",
            subtitle: "Practical applications of RxJS in modern web development",
            blocks: vec![
                section("State Management"),
                code(
                    "ts",
                    r#"class Store<T> {
  private state$: BehaviorSubject<T>;

  constructor(initialState: T) {
    this.state$ = new BehaviorSubject<T>(initialState);
  }

  setState(next: Partial<T>) {
    this.state$.next({ ...this.state$.getValue(), ...next });
  }

  select<K>(selector: (state: T) => K) {
    return this.state$.pipe(map(selector), distinctUntilChanged());
  }
}"#,
                ),
                section("HTTP Requests with RxJS"),
                code(
                    "ts",
                    r#"getUsers(): Observable<User[]> {
  if (!this.usersCache$) {
    this.usersCache$ = this.http.get<User[]>(this.apiUrl).pipe(
      retry(3),
      catchError(this.handleError),
      shareReplay(1)
    );
  }
  return this.usersCache$;
}"#,
                ),
            ],
        },
    ]
}
